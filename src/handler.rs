pub mod notification;
pub use notification as Notification;

pub mod notice;
pub use notice as Notice;

pub mod assignment;
pub use assignment as Assignment;

pub mod material;
pub use material as Material;

pub mod attendance;
pub use attendance as Attendance;

pub mod marks;
pub use marks as Marks;

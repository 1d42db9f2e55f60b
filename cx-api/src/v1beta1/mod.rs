mod alert;

pub use alert::*;

crate::impl_remote_synced!(Alert);

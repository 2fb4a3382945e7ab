//! SQL for the notifications table, one function per store operation.

pub mod notification_ops;

mod notification_store;

pub use notification_store::NotificationStore;

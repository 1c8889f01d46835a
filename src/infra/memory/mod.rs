pub mod notification_store;

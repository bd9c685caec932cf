// Export components
pub mod events;

// Re-export the events handle
pub use events::EventsHandle;

pub mod badge;

pub use badge::SentBadge;

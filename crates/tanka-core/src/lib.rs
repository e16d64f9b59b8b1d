pub mod bundle;
pub mod clock;
pub mod composer;
pub mod error;
pub mod mora;
pub mod pool;
pub mod preprocess;
pub mod reading;
pub mod state;
pub mod submission;
pub mod sync;
pub mod validate;

#[cfg(test)]
mod tests;

pub use bundle::PhraseBundle;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{BundleError, ComposeError, InvalidPhrase, Rejection};
pub use reading::ReadingProvider;
pub use state::TankaState;
pub use submission::{Accepted, Submitter};
pub use validate::Validator;

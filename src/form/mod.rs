pub mod submitter;
pub mod transport;
pub mod view;

pub use submitter::{FormAction, FormSubmitter, Submission};
pub use transport::HttpTransport;
pub use view::{FormFields, TodoPage};

//! Concrete repository implementations, one per entity collection.

pub mod case;
pub mod option_set;
pub mod person;
pub mod upload;

pub use case::CaseRepository;
pub use option_set::OptionSetRepository;
pub use person::PersonRepository;
pub use upload::UploadRepository;

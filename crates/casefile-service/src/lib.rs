//! # casefile-service
//!
//! Business operations over the repositories. The main added value over
//! raw repository calls is reference resolution: case reads embed the
//! referenced person in place of the bare identifier, and the extended
//! person read embeds display labels for option-reference fields.

pub mod case;
pub mod option_set;
pub mod person;
pub mod resolver;
pub mod upload;

pub use case::{CaseService, ResolvedCase};
pub use option_set::OptionSetService;
pub use person::{OptionLabels, PersonService, ResolvedPerson};
pub use upload::UploadService;

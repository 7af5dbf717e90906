//! Person entity.

pub mod model;

pub use model::{
    ContactInfo, CreatePerson, Gender, IdentificationDocuments, Person, PersonalInfo,
    ProfessionalInfo, UpdatePerson, UploadRefs,
};

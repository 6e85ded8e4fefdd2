/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! cff_core - Reader and validator for Citation File Format 1.0.3
//!
//! A `CITATION.cff` file is read in two steps. The YAML is first parsed into
//! raw records ([`raw`]) that hold every key as an unvalidated option. Each
//! raw record is then turned into its typed form ([`Citation`],
//! [`Reference`], [`Person`], [`Entity`]) by checking required keys first and
//! value formats second, stopping at the first problem.
//!
//! ```
//! let citation = cff_core::read_from_str(
//!     "cff-version: 1.0.3
//! message: If you use this software, please cite it as below.
//! authors:
//!   - family-names: Druskat
//!     given-names: Stephan
//! date-released: 2017-12-11
//! title: My Research Tool
//! version: 1.0.4
//! ",
//! )?;
//! assert_eq!(citation.person_authors()[0].family_names(), "Druskat");
//! # Ok::<(), cff_core::Error>(())
//! ```

#[macro_use]
mod macros;

pub mod citation;
mod de;
pub mod error;
pub mod raw;
pub mod reader;
pub mod reference;
pub mod subject;
pub mod tables;
pub mod validate;
pub mod writer;

pub use cff_date::Date;
pub use citation::{Citation, CFF_VERSION};
pub use error::{Error, Result, ValidationCategory, ValidationError, ValidationKind};
pub use reader::{
    read_from_file, read_from_reader, read_from_slice, read_from_str, ReadState, Reader,
    CFF_FILE_NAME,
};
pub use reference::{Reference, ReferenceStatus, ReferenceType};
pub use subject::{entities, persons, Contact, Entity, Person, Subject, SubjectKind, SubjectNode};
pub use writer::{to_json_string, to_yaml_string};

pub mod book;
pub mod contact;

use crate::errors::AppError;
use std::fmt;

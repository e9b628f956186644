//! Vector type

use crate::error::{Result, VectorDbError};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A point in n-dimensional space. The length is fixed once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Create a new vector from a Vec<f32>
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Create a vector, rejecting empty input.
    pub fn non_empty(data: Vec<f32>) -> Result<Self> {
        if data.is_empty() {
            return Err(VectorDbError::InvalidVector {
                reason: "Vector cannot be empty".to_string(),
            });
        }
        Ok(Self::new(data))
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

impl Deref for Vector {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.data
    }
}

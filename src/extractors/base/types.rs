// Data structures shared by the parser, the extractor and the generator

use std::path::PathBuf;

/// Underlying shape of a top-level type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// `type T struct { ... }`
    Record,
    /// `type T = U`
    Alias,
    /// `type T interface { ... }`
    Interface,
    /// `type T func(...)`
    Function,
    /// Any other named type: `type ID int64`, `type Set map[string]bool`, ...
    Definition,
}

impl TypeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeShape::Record => "struct",
            TypeShape::Alias => "alias",
            TypeShape::Interface => "interface",
            TypeShape::Function => "func",
            TypeShape::Definition => "definition",
        }
    }
}

/// One top-level type declaration lowered out of the syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub shape: TypeShape,
    /// Type parameter names for generic declarations, in declaration order
    pub type_params: Vec<String>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            type_params: Vec::new(),
        }
    }

    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }
}

/// One parsed input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    /// Name from the `package` clause
    pub package: String,
    /// Top-level type declarations in source order
    pub declarations: Vec<TypeDeclaration>,
}

/// A type name under consideration for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCandidate {
    pub name: String,
    pub type_params: Vec<String>,
    pub record_shaped: bool,
    /// Exclusion pattern that dropped this candidate, if any
    pub excluded_by: Option<String>,
}

impl TypeCandidate {
    pub fn is_included(&self) -> bool {
        self.record_shaped && self.excluded_by.is_none()
    }
}

/// Extraction result for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub path: PathBuf,
    pub package: String,
    /// Every record-shaped candidate, included or excluded, in declaration order
    pub candidates: Vec<TypeCandidate>,
}

impl Extraction {
    /// Included candidates in declaration order
    pub fn included(&self) -> impl Iterator<Item = &TypeCandidate> {
        self.candidates.iter().filter(|c| c.is_included())
    }

    pub fn included_names(&self) -> Vec<&str> {
        self.included().map(|c| c.name.as_str()).collect()
    }

    /// Nothing left to generate for this file
    pub fn is_empty(&self) -> bool {
        self.included().next().is_none()
    }
}

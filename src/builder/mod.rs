//! The persona builder: one state object, one dispatch entry point
//!
//! Every user intent is an [`Action`]. [`Builder::dispatch`] applies it to
//! the profile, or rejects it without touching anything. Rendering is a
//! separate step that reads the profile afterwards.

use rand::Rng;
use thiserror::Error;

use crate::persona::{Dimension, Field, FieldKind, Profile, ProfileError};
use crate::render::Format;
use crate::vocab::Vocabulary;

pub mod command;
pub mod randomize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle { field: Field, label: String },
    Remove { field: Field, label: String },
    SetText { field: Field, text: String },
    SetDimension { dimension: Dimension, value: u8 },
    SelectFormat(Format),
    Clear,
    Randomize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Trait data not loaded yet. Please wait a moment and try again.")]
    NotReady,

    #[error("'{label}' is not an option for {field}")]
    UnknownLabel { field: Field, label: String },

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    profile: Profile,
    vocabulary: Option<Vocabulary>,
    format: Format,
}

impl Builder {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the profile wholesale (loading a saved profile)
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    /// Whether a non-empty vocabulary has been loaded
    pub fn is_ready(&self) -> bool {
        self.vocabulary.as_ref().is_some_and(|v| !v.is_empty())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Apply one action. On error the builder is unchanged.
    pub fn dispatch<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Result<(), BuilderError> {
        log::debug!("dispatch: {:?}", action);

        match action {
            Action::Toggle { field, label } => {
                if field.kind() == FieldKind::Text {
                    return Err(ProfileError::WrongKind {
                        field,
                        kind: FieldKind::Text,
                    }
                    .into());
                }
                // Deselecting is always allowed; new selections must come from the vocabulary
                if !self.profile.is_selected(field, &label) {
                    let vocabulary = self.vocabulary.as_ref().ok_or(BuilderError::NotReady)?;
                    if !vocabulary.contains(field, &label) {
                        return Err(BuilderError::UnknownLabel { field, label });
                    }
                }
                self.profile.toggle(field, &label)?;
            }
            Action::Remove { field, label } => self.profile.remove(field, &label)?,
            Action::SetText { field, text } => self.profile.set_text(field, &text)?,
            Action::SetDimension { dimension, value } => self.profile.set_dimension(dimension, value)?,
            Action::SelectFormat(format) => self.format = format,
            Action::Clear => self.profile.reset(),
            Action::Randomize => {
                if !self.is_ready() {
                    return Err(BuilderError::NotReady);
                }
                if let Some(vocabulary) = &self.vocabulary {
                    self.profile = randomize::randomize(vocabulary, rng);
                }
            }
        }

        Ok(())
    }
}

use garde::Validate;
use kernel::model::{
    genre::{
        event::{CreateGenre, UpdateGenre},
        Genre,
    },
    id::GenreId,
};
use serde::{Deserialize, Serialize};

use super::{collect_report, sanitize, FormOutcome};

#[derive(Debug, Default, Deserialize)]
pub struct GenreFormData {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct GenreDraft {
    #[garde(length(chars, min = 1))]
    pub name: String,
}

pub fn validate_genre(data: GenreFormData) -> FormOutcome<GenreDraft> {
    let mut errors = Vec::new();
    let draft = GenreDraft {
        name: sanitize(&data.name),
    };
    collect_report(&draft, &mut errors);
    FormOutcome { draft, errors }
}

impl From<GenreDraft> for CreateGenre {
    fn from(draft: GenreDraft) -> Self {
        Self { name: draft.name }
    }
}

impl GenreDraft {
    pub fn into_update(self, genre_id: GenreId) -> UpdateGenre {
        UpdateGenre {
            genre_id,
            name: self.name,
        }
    }
}

impl From<Genre> for GenreDraft {
    fn from(genre: Genre) -> Self {
        Self { name: genre.name }
    }
}

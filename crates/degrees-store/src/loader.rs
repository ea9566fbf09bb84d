//! CSV ingestion for the membership graph.
//!
//! Reads `people.csv` (`id,name,birth`), `movies.csv` (`id,title,year`),
//! and `stars.csv` (`person_id,movie_id`) from a directory. Titles and
//! names may contain commas and quotes; the `csv` crate handles quoting.

use std::path::Path;

use serde::Deserialize;

use degrees_core::{MovieId, PersonId, StoreError};

use crate::store::MembershipGraph;
use crate::types::{Movie, Person};

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Counts from one `load_directory` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadStats {
    pub people: usize,
    pub movies: usize,
    pub links: usize,
    /// Membership rows skipped because they referenced an unknown id.
    pub dangling_links: usize,
}

/// Load a membership graph from the three CSV files in `directory`.
///
/// Membership rows referencing ids absent from `people.csv`/`movies.csv`
/// are skipped and counted, not treated as errors.
pub fn load_directory(directory: &Path) -> Result<(MembershipGraph, LoadStats), StoreError> {
    let mut graph = MembershipGraph::new();
    let mut stats = LoadStats::default();

    let people_path = file_in(directory, "people.csv")?;
    let mut reader = csv::Reader::from_path(&people_path)?;
    for row in reader.deserialize() {
        let row: PersonRow = row?;
        graph.insert_person(
            PersonId::new(row.id),
            Person {
                name: row.name,
                birth: row.birth,
            },
        );
        stats.people += 1;
    }

    let movies_path = file_in(directory, "movies.csv")?;
    let mut reader = csv::Reader::from_path(&movies_path)?;
    for row in reader.deserialize() {
        let row: MovieRow = row?;
        graph.insert_movie(
            MovieId::new(row.id),
            Movie {
                title: row.title,
                year: row.year,
            },
        );
        stats.movies += 1;
    }

    let stars_path = file_in(directory, "stars.csv")?;
    let mut reader = csv::Reader::from_path(&stars_path)?;
    for row in reader.deserialize() {
        let row: StarRow = row?;
        let person = PersonId::new(row.person_id);
        let movie = MovieId::new(row.movie_id);
        if graph.link(&person, &movie) {
            stats.links += 1;
        } else {
            tracing::debug!(person = %person, movie = %movie, "Skipping dangling membership row");
            stats.dangling_links += 1;
        }
    }

    tracing::info!(
        people = stats.people,
        movies = stats.movies,
        links = stats.links,
        dangling = stats.dangling_links,
        "Membership graph loaded"
    );

    Ok((graph, stats))
}

fn file_in(directory: &Path, name: &str) -> Result<std::path::PathBuf, StoreError> {
    let path = directory.join(name);
    if !path.is_file() {
        return Err(StoreError::MissingFile {
            path: path.display().to_string(),
        });
    }
    Ok(path)
}

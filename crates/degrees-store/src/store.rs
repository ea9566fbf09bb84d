//! In-memory bipartite membership graph.

use degrees_core::types::collections::{FxHashMap, FxHashSet};
use degrees_core::{MovieId, NeighborSource, PersonId};

use crate::types::{Movie, Person};

/// The three relations backing neighbor lookup: people, movies, and the
/// many-to-many membership between them, indexed from both sides.
///
/// The graph is append-only while loading and read-only during a search;
/// the `NeighborSource` impl takes `&self` throughout.
#[derive(Debug, Default)]
pub struct MembershipGraph {
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
    movies_of: FxHashMap<PersonId, FxHashSet<MovieId>>,
    cast_of: FxHashMap<MovieId, FxHashSet<PersonId>>,
}

impl MembershipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_person(&mut self, id: PersonId, person: Person) {
        self.people.insert(id, person);
    }

    pub fn insert_movie(&mut self, id: MovieId, movie: Movie) {
        self.movies.insert(id, movie);
    }

    /// Record that `person` appears in `movie`. Membership rows naming an
    /// unknown person or movie are ignored, matching the source corpus
    /// where the stars file references ids absent from the other two.
    /// Returns whether the link was recorded.
    pub fn link(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        if !self.people.contains_key(person) || !self.movies.contains_key(movie) {
            return false;
        }
        self.movies_of
            .entry(person.clone())
            .or_default()
            .insert(movie.clone());
        self.cast_of
            .entry(movie.clone())
            .or_default()
            .insert(person.clone());
        true
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Iterate over all person records (for building the name index).
    pub fn people(&self) -> impl Iterator<Item = (&PersonId, &Person)> {
        self.people.iter()
    }

    fn movies_of(&self, person: &PersonId) -> Option<&FxHashSet<MovieId>> {
        self.movies_of.get(person)
    }
}

impl NeighborSource for MembershipGraph {
    fn contains(&self, person: &PersonId) -> bool {
        self.people.contains_key(person)
    }

    fn neighbors_of(&self, person: &PersonId) -> Vec<(MovieId, PersonId)> {
        let mut pairs: FxHashSet<(MovieId, PersonId)> = FxHashSet::default();
        if let Some(movies) = self.movies_of(person) {
            for movie in movies {
                if let Some(cast) = self.cast_of.get(movie) {
                    for member in cast {
                        pairs.insert((movie.clone(), member.clone()));
                    }
                }
            }
        }
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            birth: "1970".to_string(),
        }
    }

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: "2000".to_string(),
        }
    }

    fn two_movie_graph() -> MembershipGraph {
        // M1: {A, B}, M2: {B, C}
        let mut graph = MembershipGraph::new();
        graph.insert_person(PersonId::from("a"), person("Alice"));
        graph.insert_person(PersonId::from("b"), person("Bob"));
        graph.insert_person(PersonId::from("c"), person("Carol"));
        graph.insert_movie(MovieId::from("m1"), movie("First"));
        graph.insert_movie(MovieId::from("m2"), movie("Second"));
        assert!(graph.link(&PersonId::from("a"), &MovieId::from("m1")));
        assert!(graph.link(&PersonId::from("b"), &MovieId::from("m1")));
        assert!(graph.link(&PersonId::from("b"), &MovieId::from("m2")));
        assert!(graph.link(&PersonId::from("c"), &MovieId::from("m2")));
        graph
    }

    #[test]
    fn test_neighbors_cover_all_shared_movies() {
        let graph = two_movie_graph();
        let neighbors = graph.neighbors_of(&PersonId::from("b"));

        // B's neighborhood spans both movies, self-pairs included.
        assert!(neighbors.contains(&(MovieId::from("m1"), PersonId::from("a"))));
        assert!(neighbors.contains(&(MovieId::from("m1"), PersonId::from("b"))));
        assert!(neighbors.contains(&(MovieId::from("m2"), PersonId::from("c"))));
        assert!(neighbors.contains(&(MovieId::from("m2"), PersonId::from("b"))));
        assert_eq!(neighbors.len(), 4);
    }

    #[test]
    fn test_neighbors_of_unlinked_person_is_empty() {
        let mut graph = two_movie_graph();
        graph.insert_person(PersonId::from("d"), person("Dave"));
        assert!(graph.neighbors_of(&PersonId::from("d")).is_empty());
    }

    #[test]
    fn test_link_with_unknown_id_is_ignored() {
        let mut graph = two_movie_graph();
        assert!(!graph.link(&PersonId::from("ghost"), &MovieId::from("m1")));
        assert!(!graph.link(&PersonId::from("a"), &MovieId::from("m9")));
        assert!(graph.neighbors_of(&PersonId::from("ghost")).is_empty());
    }

    #[test]
    fn test_contains() {
        let graph = two_movie_graph();
        assert!(graph.contains(&PersonId::from("a")));
        assert!(!graph.contains(&PersonId::from("ghost")));
    }

    #[test]
    fn test_duplicate_links_do_not_duplicate_neighbors() {
        let mut graph = two_movie_graph();
        assert!(graph.link(&PersonId::from("b"), &MovieId::from("m1")));
        assert_eq!(graph.neighbors_of(&PersonId::from("b")).len(), 4);
    }
}

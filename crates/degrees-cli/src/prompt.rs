//! Interactive name prompts and disambiguation.
//!
//! Generic over the input/output streams so the session can be driven by
//! a test script as well as a terminal.

use std::io::{BufRead, Write};

use degrees_core::errors::CliError;
use degrees_core::PersonId;
use degrees_store::{MembershipGraph, NameIndex, NameMatch};

fn read_line<R: BufRead>(input: &mut R) -> Result<String, CliError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a name and resolve it to a unique person id, asking the
/// user to pick an id when several people share the name.
pub fn prompt_person<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    graph: &MembershipGraph,
    names: &NameIndex,
) -> Result<PersonId, CliError> {
    write!(output, "Name: ")?;
    output.flush()?;
    let name = read_line(input)?;

    match names.resolve(&name) {
        NameMatch::None => Err(CliError::PersonNotFound { name }),
        NameMatch::Unique(id) => Ok(id),
        NameMatch::Ambiguous(candidates) => {
            writeln!(output, "Which '{name}'?")?;
            for id in &candidates {
                if let Some(person) = graph.person(id) {
                    writeln!(
                        output,
                        "ID: {id}, Name: {}, Birth: {}",
                        person.name, person.birth
                    )?;
                }
            }
            write!(output, "Intended Person ID: ")?;
            output.flush()?;
            let chosen = PersonId::new(read_line(input)?);
            if candidates.contains(&chosen) {
                Ok(chosen)
            } else {
                Err(CliError::PersonNotFound { name })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_store::Person;

    fn graph_with(names: &[(&str, &str)]) -> (MembershipGraph, NameIndex) {
        let mut graph = MembershipGraph::new();
        for (id, name) in names {
            graph.insert_person(
                PersonId::from(*id),
                Person {
                    name: name.to_string(),
                    birth: "1970".to_string(),
                },
            );
        }
        let index = NameIndex::build(&graph);
        (graph, index)
    }

    #[test]
    fn test_unique_name() {
        let (graph, names) = graph_with(&[("1", "Alice")]);
        let mut input = "Alice\n".as_bytes();
        let mut output = Vec::new();

        let id = prompt_person(&mut input, &mut output, &graph, &names).unwrap();
        assert_eq!(id, PersonId::from("1"));
        assert!(String::from_utf8(output).unwrap().starts_with("Name: "));
    }

    #[test]
    fn test_unknown_name() {
        let (graph, names) = graph_with(&[("1", "Alice")]);
        let mut input = "Nobody\n".as_bytes();
        let mut output = Vec::new();

        let err = prompt_person(&mut input, &mut output, &graph, &names).unwrap_err();
        assert!(matches!(err, CliError::PersonNotFound { name } if name == "Nobody"));
    }

    #[test]
    fn test_ambiguous_name_resolved_by_id() {
        let (graph, names) = graph_with(&[("1", "Chris Evans"), ("2", "Chris Evans")]);
        let mut input = "Chris Evans\n2\n".as_bytes();
        let mut output = Vec::new();

        let id = prompt_person(&mut input, &mut output, &graph, &names).unwrap();
        assert_eq!(id, PersonId::from("2"));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Which 'Chris Evans'?"));
        assert!(transcript.contains("ID: 1"));
        assert!(transcript.contains("ID: 2"));
    }

    #[test]
    fn test_ambiguous_name_with_bad_id_fails() {
        let (graph, names) = graph_with(&[("1", "Chris Evans"), ("2", "Chris Evans")]);
        let mut input = "Chris Evans\n99\n".as_bytes();
        let mut output = Vec::new();

        let err = prompt_person(&mut input, &mut output, &graph, &names).unwrap_err();
        assert!(matches!(err, CliError::PersonNotFound { .. }));
    }
}

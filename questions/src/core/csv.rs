//! CSV export of a question collection.
//!
//! Layout: a fixed header line, then one `id,name,options,points,published`
//! row per question. `options` is the number of options. Rows are joined by
//! `\n` with no trailing newline. Values are written verbatim, so a name that
//! contains a comma produces an extra column.

use crate::question::Question;

pub const CSV_HEADER: &str = "id,name,options,points,published";

pub fn to_csv(questions: &[Question]) -> String {
    let rows = questions.iter().map(csv_row).collect::<Vec<_>>();
    format!("{}\n{}", CSV_HEADER, rows.join("\n"))
}

fn csv_row(question: &Question) -> String {
    format!(
        "{},{},{},{},{}",
        question.id,
        question.name,
        question.options.len(),
        question.points,
        question.published
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{question, sample_collection, scored};

    #[test]
    fn to_csv_matches_documented_layout() {
        let questions = vec![
            scored(question(1, "Addition"), 1, true),
            scored(question(2, "Letters"), 1, false),
        ];
        assert_eq!(
            to_csv(&questions),
            "id,name,options,points,published\n1,Addition,0,1,true\n2,Letters,0,1,false"
        );
    }

    #[test]
    fn to_csv_counts_options() {
        assert_eq!(
            to_csv(&sample_collection()),
            "id,name,options,points,published\n\
             1,Addition,0,1,true\n\
             2,Letters,0,1,false\n\
             5,Colors,3,1,true\n\
             9,Shapes,3,2,false"
        );
    }

    #[test]
    fn to_csv_of_empty_collection_is_header_and_separator() {
        assert_eq!(to_csv(&[]), "id,name,options,points,published\n");
    }

    #[test]
    fn to_csv_does_not_escape_commas() {
        let questions = vec![scored(question(3, "Red, green"), 2, true)];
        assert_eq!(
            to_csv(&questions),
            "id,name,options,points,published\n3,Red, green,0,2,true"
        );
    }
}

use crate::output::{print_json, print_table};
use teamhub_core::catalog;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&catalog::all_questions());
    }

    let rows: Vec<Vec<String>> = catalog::all_questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let options: Vec<&str> = q.options.iter().map(|o| o.value).collect();
            vec![
                (i + 1).to_string(),
                q.group.to_string(),
                q.key.to_string(),
                q.kind.to_string(),
                q.prompt.to_string(),
                options.join(" / "),
            ]
        })
        .collect();
    print_table(&["#", "GROUP", "KEY", "KIND", "QUESTION", "OPTIONS"], &rows);
    Ok(())
}

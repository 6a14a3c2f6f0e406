//! Check command implementation

use crate::cli::commands::{project_dir, resolve_matcher};
use crate::cli::SelectionArgs;
use crate::matcher::{PatternMatcher, Selection};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

/// Execute the check command
pub fn execute(paths: Vec<String>, selection: &SelectionArgs, json: bool) -> Result<()> {
    let dir = project_dir(None)?;
    let (_, matcher) = resolve_matcher(selection, &dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report(&matcher, &paths))?);
        return Ok(());
    }

    for path in &paths {
        let decision = matcher.explain(path);
        let label = match &decision {
            Selection::Selected { .. } => "selected".green(),
            Selection::Excluded { .. } => "excluded".red(),
            Selection::NotIncluded => "not included".yellow(),
        };
        let detail = match &decision {
            Selection::Selected { by: Some(pattern) } | Selection::Excluded { by: pattern } => {
                format!(" ({})", pattern).dimmed().to_string()
            },
            _ => String::new(),
        };
        println!("{:>14}  {}{}", label, path, detail);
    }

    Ok(())
}

fn report(matcher: &PatternMatcher, paths: &[String]) -> serde_json::Value {
    let results: Vec<_> = paths
        .iter()
        .map(|path| {
            let decision = matcher.explain(path);
            json!({
                "path": path,
                "selected": decision.is_selected(),
                "decision": decision,
            })
        })
        .collect();

    json!({
        "include": matcher.includes().sources(),
        "exclude": matcher.excludes().sources(),
        "case_sensitive": matcher.is_case_sensitive(),
        "results": results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report() {
        let matcher = PatternMatcher::new(["*.py"], ["test_*.py"]).unwrap();
        let value = report(
            &matcher,
            &["file.py".to_string(), "test_file.py".to_string(), "a.txt".to_string()],
        );

        assert_eq!(value["include"], json!(["*.py"]));
        assert_eq!(value["results"][0]["selected"], json!(true));
        assert_eq!(value["results"][0]["decision"]["by"], json!("*.py"));
        assert_eq!(value["results"][1]["decision"]["status"], json!("excluded"));
        assert_eq!(value["results"][2]["decision"]["status"], json!("not_included"));
    }
}

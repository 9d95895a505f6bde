//! `sources` command: print the source lean table.

use mediatrust_analysis::{BiasLean, SOURCE_BIAS};

pub(crate) fn run_sources() {
    print!("{}", format_sources(SOURCE_BIAS));
}

pub(crate) fn format_sources(table: &[(&str, BiasLean)]) -> String {
    let mut rows: Vec<(&str, BiasLean)> = table.to_vec();
    rows.sort_by(|a, b| {
        a.1.score()
            .total_cmp(&b.1.score())
            .then_with(|| a.0.cmp(b.0))
    });

    let mut out = format!("{:<28}{:<14}SCORE\n", "SOURCE", "LEAN");
    for (name, lean) in rows {
        out.push_str(&format!("{name:<28}{:<14}{:+.1}\n", lean.as_str(), lean.score()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_source_once() {
        let out = format_sources(SOURCE_BIAS);
        assert_eq!(out.lines().count(), SOURCE_BIAS.len() + 1);
        for (name, _) in SOURCE_BIAS {
            assert_eq!(
                out.lines().filter(|l| l.starts_with(&format!("{name} "))).count(),
                1,
                "{name}"
            );
        }
    }

    #[test]
    fn orders_left_to_right() {
        let out = format_sources(&[
            ("zeta", BiasLean::Right),
            ("alpha", BiasLean::Left),
            ("mid", BiasLean::Center),
        ]);
        let names: Vec<&str> = out
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
        assert!(out.contains("-1.0"));
        assert!(out.contains("+1.0"));
    }
}

//! End-to-end checks of the line pipeline on a realistic xsdir.

use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use xsdir_replace::transform_text;

fn fixture_text(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

#[test]
fn sample_xsdir_converts() {
    let output = transform_text(&fixture_text("xsdir_sample"));
    let stats = output.stats();
    assert_eq!(stats.comments_dropped, 3);
    assert_eq!(stats.date_lines_removed, 1);

    insta::assert_snapshot!(output.into_text().trim_end(), @r"
datapath=home/mobaxterm/serpent/Serpent2xsdata
datapath=/opt/mcnp/MCNP_DATA
atomic weight ratios
     1    0.999167     1001   0.999167     1002   1.996800
     2    3.968200     2003   2.989596     2004   3.968220
directory
  1001.70c   0.999167 endf70a 0 1     1   4939 0 0 2.5301E-08
  1001.80c   0.999167 endf80/H/1001.800nc 0 1 4 17969 0 0 2.5301E-08 ptable
  92238.66c 236.005800 endf66c 0 1 70 138732 0 0 2.5301E-08
  lwtr.20t   0.999170 tmccs 0 1 1 13530 0 0 2.5300E-08
");
}

/// Line bodies built from path tokens and filler that holds no `x`, so
/// removing one token can never splice a new one together.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("xdata/".to_string()),
            Just("xmc/".to_string()),
            Just("#".to_string()),
            "[a-wyz0-9 ./]{0,8}",
        ],
        0..6,
    )
    .prop_map(|parts| format!("{}\n", parts.concat()))
}

proptest! {
    #[test]
    fn comment_lines_never_survive(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let output = transform_text(&lines.concat());
        for line in output.lines() {
            prop_assert!(!line.contains('#'));
        }
        let kept = lines.iter().filter(|l| !l.contains('#')).count();
        prop_assert_eq!(output.stats().comments_dropped, lines.len() - kept);
    }

    #[test]
    fn path_tokens_never_survive(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let text = transform_text(&lines.concat()).into_text();
        prop_assert!(!text.contains("xdata/"));
        prop_assert!(!text.contains("xmc/"));
    }

    #[test]
    fn retained_lines_keep_their_order(lines in prop::collection::vec("[a-z ]{0,12}\n", 1..20)) {
        let output = transform_text(&lines.concat());
        let rebuilt = output.into_text();
        let expected = format!(
            "datapath=home/mobaxterm/serpent/Serpent2xsdata\n{}",
            lines.concat()
        );
        prop_assert_eq!(rebuilt, expected);
    }
}

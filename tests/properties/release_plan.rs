//! Property tests for generated deploy commands.

use chrono::DateTime;
use proptest::prelude::*;

use skiff::domain::services::ReleasePlan;
use skiff::domain::value_objects::ReleaseLabel;
use skiff::DeployConfig;

fn deploy_directory() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    (proptest::collection::vec(segment, 1..=4), any::<bool>()).prop_map(|(segments, slash)| {
        let mut dir = format!("/{}", segments.join("/"));
        if slash {
            dir.push('/');
        }
        dir
    })
}

fn commands() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[ -~]{0,40}", 0..8)
}

fn plan(dir: &str, commands: Vec<String>) -> ReleasePlan {
    ReleasePlan::new(&DeployConfig {
        user: "deploy".to_string(),
        deploy_directory: dir.to_string(),
        repo: "git@example.com:acme/app.git".to_string(),
        commands,
        ..Default::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: setup is always four mkdir calls, parent before child,
    /// with no doubled slashes from a trailing `/` in the config.
    #[test]
    fn property_setup_creates_four_nested_dirs(dir in deploy_directory()) {
        let setup = plan(&dir, Vec::new()).setup();
        let root = dir.trim_end_matches('/');

        prop_assert_eq!(setup.len(), 4);
        prop_assert_eq!(&setup[0], &format!("mkdir {}", root));
        prop_assert_eq!(&setup[1], &format!("mkdir {}/releases", root));
        prop_assert_eq!(&setup[2], &format!("mkdir {}/shared", root));
        prop_assert_eq!(&setup[3], &format!("mkdir {}/releases/build", root));
        prop_assert!(setup.iter().all(|c| !c.contains("//")));
    }

    /// PROPERTY: the command chain is the configured list, unchanged.
    #[test]
    fn property_command_chain_preserves_order(cmds in commands()) {
        prop_assert_eq!(plan("/srv/app", cmds.clone()).command_chain(), cmds);
    }

    /// PROPERTY: promote moves build to the labelled release and links
    /// `current` to that same path.
    #[test]
    fn property_promote_links_what_it_moved(
        dir in deploy_directory(),
        secs in 0i64..253_402_300_799,
    ) {
        let plan = plan(&dir, Vec::new());
        let at = DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
        let label = ReleaseLabel::from_datetime(at);
        let promote = plan.promote(&label);
        let release = format!("{}/releases/{}", dir.trim_end_matches('/'), label);

        prop_assert_eq!(promote.len(), 2);
        prop_assert_eq!(
            &promote[0],
            &format!("mv {} {}", plan.layout().build(), release)
        );
        prop_assert_eq!(
            &promote[1],
            &format!("ln -sf {} {}", release, plan.layout().current())
        );
    }
}

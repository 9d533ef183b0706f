    use super::*;

    fn h(name: &str) -> Histogram {
        Histogram::uniform(name, "", 0.0, 1.0, vec![1.0]).unwrap()
    }

    #[test]
    fn walk_visits_nested_groups_in_document_order() {
        let root = Group::new("DQMData")
            .with_histogram(h("a"))
            .with_group(
                Group::new("Sub")
                    .with_histogram(h("b"))
                    .with_group(Group::new("Deep").with_histogram(h("c"))),
            )
            .with_group(Group::new("Empty"))
            .with_histogram(h("d"));

        let paths: Vec<String> = walk(&root).map(|d| d.path).collect();
        assert_eq!(
            paths,
            vec!["DQMData/a", "DQMData/Sub/b", "DQMData/Sub/Deep/c", "DQMData/d"]
        );
    }

    #[test]
    fn walk_of_unnamed_root_has_no_leading_slash() {
        let root = Group::new("").with_group(Group::new("G").with_histogram(h("x")));
        let found: Vec<Discovered> = walk(&root).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "x");
        assert_eq!(found[0].path, "G/x");
    }

    #[test]
    fn walk_of_empty_group_yields_nothing() {
        assert_eq!(walk(&Group::new("root")).count(), 0);
    }

use cfgtree_edit::{Boundary, ConfigEditor, EditError, EditorConfig, PathRecord};
use cfgtree_test_utils::{card_editor, editor_with, ios_editor, sros_editor, SROS_CONFIG};
use pretty_assertions::assert_eq;

#[test]
fn card_example_operations() {
    let editor = card_editor();
    let found = editor.search(".*mda 1$", "no shut.*", true).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value, "no shutdown");

    let mut editor = card_editor();
    editor
        .delete_serial("configure,card 1,mda 1,no shutdown\n", false, false)
        .unwrap();
    assert_eq!(editor.len(), 3);
    assert_eq!(editor.records()[2], PathRecord::new("configure,card 1", "  mda 1"));
}

#[test]
fn sros_search_shutdown_mda() {
    let found = sros_editor()
        .search(r"configure,card \d,mda 1$", "shutdown", true)
        .unwrap();
    assert_eq!(
        found,
        vec![PathRecord::new("configure,card 2,mda 1", "shutdown")]
    );
}

#[test]
fn sros_search_capture_mda_types() {
    let found = sros_editor()
        .search_capture(r"configure,card (\d)", r"mda-type (\S+)")
        .unwrap();
    assert_eq!(
        found,
        vec![
            vec!["1".to_string(), "me12-100gb-qsfp28".to_string()],
            vec!["2".to_string(), "me12-100gb-qsfp28".to_string()],
        ]
    );
}

#[test]
fn sros_serial_check() {
    let editor = sros_editor();
    assert!(editor
        .serial_check("configure,card 2,mda 1,mda-type\nconfigure,card 2,mda 1,shutdown")
        .unwrap());
    assert!(!editor
        .serial_check("configure,card 1,mda 1,mda-type\nconfigure,card 1,mda 1,shutdown")
        .unwrap());
}

#[test]
fn sros_enable_mda() {
    let mut editor = sros_editor();
    let replaced = editor
        .replace_line(
            "configure,card 2,mda 1,shutdown",
            "configure,card 2,mda 1,no shutdown",
            false,
            false,
            false,
            false,
        )
        .unwrap();
    assert_eq!(replaced, 1);
    assert_eq!(editor.records()[27].value, "            no shutdown");
    assert_eq!(editor.serialize(), SROS_CONFIG.replace(
        "            shutdown\n        exit\n        no shutdown\n    exit\nexit all",
        "            no shutdown\n        exit\n        no shutdown\n    exit\nexit all",
    ));
}

#[test]
fn sros_remove_card_subtree() {
    let mut editor = sros_editor();
    let deleted = editor
        .delete_between("configure,card 2", "configure,exit", false, false)
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(editor.len(), 24);
    assert!(editor.serialize().ends_with("        no shutdown\n    exit\nexit all"));
    assert!(editor.search("configure", "card 2", false).unwrap().is_empty());
}

#[test]
fn sros_add_mda_description() {
    let mut editor = sros_editor();
    let inserted = editor
        .add_before(
            "configure,card 1,mda 1,description \"slot 1\"",
            "configure,card 1,mda 1,no shutdown",
            false,
            false,
        )
        .unwrap();
    assert_eq!(inserted, 1);
    assert_eq!(
        editor.records()[19],
        PathRecord::new("configure,card 1,mda 1", "            description \"slot 1\"")
    );
    assert_eq!(editor.records()[20].value, "            no shutdown");
}

#[test]
fn sros_boundary_region() {
    let config = EditorConfig::nokia_sros().with_boundary(Boundary::new("    card 2", "    exit"));
    let editor = editor_with(SROS_CONFIG, config);
    assert_eq!(editor.len(), 8);
    assert_eq!(editor.records()[0], PathRecord::new("", "    card 2"));
    assert_eq!(editor.records()[3].path, "card 2,mda 1");
}

#[test]
fn sros_config_from_toml() {
    let config = EditorConfig::from_toml_str(
        r##"
        step_space = 4
        comment_prefixes = ["#", "echo"]
        "##,
    )
    .unwrap();
    assert_eq!(config, EditorConfig::nokia_sros());
    let editor = ConfigEditor::new(SROS_CONFIG, config).unwrap();
    assert_eq!(editor.len(), 32);
}

#[test]
fn ios_rename_descriptions_with_backreference() {
    let mut editor = ios_editor();
    let replaced = editor
        .replace_line(
            r"interface GigabitEthernet0/(\d),description (.*)",
            r"interface GigabitEthernet0/\1,description to-\1",
            true,
            true,
            true,
            false,
        )
        .unwrap();
    assert_eq!(replaced, 1);
    assert_eq!(
        editor.records()[4],
        PathRecord::new("interface GigabitEthernet0/1", " description to-uplink")
    );
}

#[test]
fn ios_delete_shutdown_lines() {
    let mut editor = ios_editor();
    let deleted = editor
        .delete_serial("interface .*,shutdown", true, true)
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(editor.len(), 14);
    assert_eq!(editor.records()[8], PathRecord::new("", "interface GigabitEthernet0/2"));
    assert_eq!(editor.records()[9], PathRecord::new("interface GigabitEthernet0/2", "!"));
}

#[test]
fn ios_delete_interface_by_range() {
    let mut editor = ios_editor();
    let deleted = editor
        .delete_between(
            "interface GigabitEthernet0/2",
            "interface GigabitEthernet0/2,shutdown",
            true,
            false,
        )
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(editor.len(), 13);
    assert!(!editor.serialize().contains("GigabitEthernet0/2"));
}

#[test]
fn ios_replace_ospf_block_reparses() {
    let mut editor = ios_editor();
    let replaced = editor
        .replace_serial(
            "router ospf \\d\nrouter ospf \\d,network .*",
            "router ospf 2\nrouter ospf 2,network 10.0.0.0 0.0.0.255 area 0\nrouter ospf 2,passive-interface default",
            true,
            false,
        )
        .unwrap();
    assert_eq!(replaced, 1);
    assert_eq!(
        editor.records()[13],
        PathRecord::new("router ospf 2", " passive-interface default")
    );
    assert_eq!(editor.records()[14], PathRecord::new("router ospf 2", "!"));
}

#[test]
fn ios_replace_between_literal() {
    let mut editor = ios_editor();
    let replaced = editor
        .replace_between(
            "interface GigabitEthernet0/2",
            "interface GigabitEthernet0/2,shutdown",
            "interface GigabitEthernet0/2\ninterface GigabitEthernet0/2,no shutdown",
            false,
            false,
        )
        .unwrap();
    assert_eq!(replaced, 1);
    assert_eq!(
        editor.records()[9],
        PathRecord::new("interface GigabitEthernet0/2", " no shutdown")
    );
}

#[test]
fn tab_in_document_is_fatal() {
    let result = ConfigEditor::new("interface Gi0/1\n\tshutdown", EditorConfig::cisco_ios());
    assert!(matches!(result, Err(EditError::Index(_))));
}

#[test]
fn invalid_pattern_leaves_document_untouched() {
    let mut editor = ios_editor();
    let before = editor.serialize();
    let result = editor.replace_serial("interface (,shutdown", "x", true, true);
    assert!(matches!(result, Err(EditError::Pattern(_))));
    assert_eq!(editor.serialize(), before);
}

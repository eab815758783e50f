//! Testing utilities for the cfgtree workspace
//!
//! Shared fixtures, editor constructors and tracing setup.

#![allow(missing_docs)]

use cfgtree_edit::{ConfigEditor, EditorConfig};
use cfgtree_index::PathRecord;
use std::sync::Once;

/// Nokia SR OS style document: four-space steps, `#` and `echo` comments
pub const SROS_CONFIG: &str = "\
# TiMOS-B-20.10.R1 both/x86_64
exit all
configure
#--------------------------------------------------
echo \"System Configuration\"
#--------------------------------------------------
    system
        name \"R1\"
        snmp
            shutdown
        exit
    exit
#--------------------------------------------------
echo \"Card Configuration\"
#--------------------------------------------------
    card 1
        card-type iom-1
        mda 1
            mda-type me12-100gb-qsfp28
            no shutdown
        exit
        no shutdown
    exit
    card 2
        card-type iom-1
        mda 1
            mda-type me12-100gb-qsfp28
            shutdown
        exit
        no shutdown
    exit
exit all";

/// Cisco IOS style document: one-space steps, `!` comments
pub const IOS_CONFIG: &str = "\
!
hostname R1
!
interface GigabitEthernet0/1
 description uplink
 ip address 10.0.0.1 255.255.255.0
 no shutdown
!
interface GigabitEthernet0/2
 shutdown
!
router ospf 1
 network 10.0.0.0 0.0.0.255 area 0
!
end";

/// Minimal nested document with one-space steps
pub const CARD_CONFIG: &str = "configure\n card 1\n  mda 1\n   no shutdown";

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn records(pairs: &[(&str, &str)]) -> Vec<PathRecord> {
    pairs
        .iter()
        .map(|(path, value)| PathRecord::new(*path, *value))
        .collect()
}

pub fn editor_with(text: &str, config: EditorConfig) -> ConfigEditor {
    init_tracing();
    ConfigEditor::new(text, config).unwrap()
}

pub fn card_editor() -> ConfigEditor {
    editor_with(CARD_CONFIG, EditorConfig::default())
}

pub fn sros_editor() -> ConfigEditor {
    editor_with(SROS_CONFIG, EditorConfig::nokia_sros())
}

pub fn ios_editor() -> ConfigEditor {
    editor_with(IOS_CONFIG, EditorConfig::cisco_ios())
}

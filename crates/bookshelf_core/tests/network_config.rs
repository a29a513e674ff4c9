use bookshelf_core::{ConfigError, InterfaceState, NetworkConfigManager};

fn connected_manager() -> NetworkConfigManager {
    let mut manager = NetworkConfigManager::new();
    manager.connect();
    manager
}

#[test]
fn defaults_are_reported_after_construction() {
    let mut manager = connected_manager();

    assert_eq!(manager.show_hostname(), "hostname: 1");
    assert_eq!(manager.show_interface_state(), "interface_state: down");
    assert_eq!(
        manager.show_response_prefix(),
        "response_prefix: Standard Response"
    );

    manager.disconnect();
}

#[test]
fn update_hostname_is_reflected() {
    let mut manager = connected_manager();

    manager.update_hostname("RouterX");
    assert_eq!(manager.show_hostname(), "hostname: RouterX");

    manager.disconnect();
}

#[test]
fn update_interface_state_accepts_up_and_down() {
    let mut manager = connected_manager();

    manager.update_interface_state("up").unwrap();
    assert_eq!(manager.show_interface_state(), "interface_state: up");
    assert_eq!(manager.interface_state(), InterfaceState::Up);

    manager.update_interface_state("down").unwrap();
    assert_eq!(manager.show_interface_state(), "interface_state: down");

    manager.disconnect();
}

#[test]
fn update_response_prefix_is_reflected() {
    let mut manager = connected_manager();

    manager.update_response_prefix("CustomPrefix:");
    assert_eq!(
        manager.show_response_prefix(),
        "response_prefix: CustomPrefix:"
    );

    manager.disconnect();
}

#[test]
fn invalid_interface_state_is_rejected_and_state_kept() {
    let mut manager = connected_manager();
    manager.update_interface_state("up").unwrap();

    for value in ["sideways", "left", "UP", ""] {
        let err = manager.update_interface_state(value).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidArgument {
                field: "interface_state",
                value: value.to_string(),
            }
        );
    }
    assert_eq!(manager.show_interface_state(), "interface_state: up");

    manager.disconnect();
}

#[test]
fn connect_and_disconnect_are_paired() {
    let mut manager = NetworkConfigManager::new();
    assert!(!manager.is_connected());

    manager.connect();
    assert!(manager.is_connected());
    manager.disconnect();
    assert!(!manager.is_connected());

    manager.disconnect();
    assert!(!manager.is_connected());
}

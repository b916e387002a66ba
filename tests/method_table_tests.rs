use pretty_assertions::assert_eq;
use std::collections::HashSet;
use zabbix_rs::METHOD_TABLE;

#[test]
fn every_method_maps_to_its_wire_name() {
    for (fn_name, wire) in METHOD_TABLE {
        let (resource, action) = fn_name
            .split_once('_')
            .unwrap_or_else(|| panic!("{fn_name} has no resource prefix"));
        // Wire actions are the snake-case suffix with underscores removed:
        // host_mass_add -> host.massadd.
        let expected = format!("{}.{}", resource, action.replace('_', ""));
        assert_eq!(*wire, expected, "mismatch for {fn_name}");
    }
}

#[test]
fn wire_names_are_lowercase_resource_dot_action() {
    for (_, wire) in METHOD_TABLE {
        assert_eq!(wire.matches('.').count(), 1, "{wire} is not resource.action");
        assert_eq!(
            *wire,
            wire.to_lowercase(),
            "{wire} has uppercase characters"
        );
    }
}

#[test]
fn no_duplicate_methods() {
    let fn_names: HashSet<_> = METHOD_TABLE.iter().map(|(name, _)| name).collect();
    let wire_names: HashSet<_> = METHOD_TABLE.iter().map(|(_, wire)| wire).collect();
    assert_eq!(fn_names.len(), METHOD_TABLE.len());
    assert_eq!(wire_names.len(), METHOD_TABLE.len());
}

#[test]
fn session_methods_are_not_generated() {
    // login/logout/version/checkAuthentication are hand-written on the
    // client because they manage the token.
    for excluded in [
        "user.login",
        "user.logout",
        "apiinfo.version",
        "user.checkAuthentication",
    ] {
        assert!(
            !METHOD_TABLE.iter().any(|(_, wire)| *wire == excluded),
            "{excluded} should not be in the generated table"
        );
    }
}

#[test]
fn table_covers_the_full_api_surface() {
    assert!(
        METHOD_TABLE.len() >= 200,
        "expected the full method surface, got {}",
        METHOD_TABLE.len()
    );

    for expected in [
        ("host_get", "host.get"),
        ("host_mass_add", "host.massadd"),
        ("trigger_add_dependencies", "trigger.adddependencies"),
        ("screenitem_update_by_position", "screenitem.updatebyposition"),
        ("usermacro_create_global", "usermacro.createglobal"),
        ("configuration_import", "configuration.import"),
        ("script_get_scripts_by_hosts", "script.getscriptsbyhosts"),
        ("service_get_sla", "service.getsla"),
        ("user_update_profile", "user.updateprofile"),
    ] {
        assert!(
            METHOD_TABLE.contains(&expected),
            "missing {expected:?} in method table"
        );
    }
}

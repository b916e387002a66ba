//! The generated Zabbix method surface.
//!
//! Every method is a forwarding call into [`ZabbixApiClient::call`] with its
//! literal `"resource.action"` wire name; there is no per-method logic,
//! validation or branching. Parameters are whatever the server-side method
//! accepts (`serde_json::json!` literals or any `Serialize` value) and the
//! result comes back as raw [`Value`].
//!
//! `user.login`, `user.logout`, `apiinfo.version` and
//! `user.checkAuthentication` are hand-written on [`ZabbixApiClient`]
//! because of their session-token semantics, and are therefore not part of
//! this table.

use crate::api_client::ZabbixApiClient;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

macro_rules! api_methods {
    ($($(#[$meta:meta])* $fn_name:ident => $wire:literal,)+) => {
        impl ZabbixApiClient {
            $(
                $(#[$meta])*
                pub async fn $fn_name(&mut self, params: impl Serialize) -> Result<Value> {
                    self.call($wire, params).await
                }
            )+
        }

        /// `(rust_name, wire_name)` pairs for every generated method.
        pub const METHOD_TABLE: &[(&str, &str)] = &[
            $((stringify!($fn_name), $wire)),+
        ];
    };
}

api_methods! {
    // action
    action_get => "action.get",
    action_create => "action.create",
    action_update => "action.update",
    action_delete => "action.delete",
    action_exists => "action.exists",

    // alert
    alert_get => "alert.get",

    // application
    application_get => "application.get",
    application_create => "application.create",
    application_update => "application.update",
    application_delete => "application.delete",
    application_mass_add => "application.massadd",
    application_exists => "application.exists",

    // configuration
    /// Export configuration entities in XML or JSON format.
    configuration_export => "configuration.export",
    /// Import a previously exported configuration dump.
    configuration_import => "configuration.import",

    // correlation
    correlation_get => "correlation.get",
    correlation_create => "correlation.create",
    correlation_update => "correlation.update",
    correlation_delete => "correlation.delete",

    // dashboard
    dashboard_get => "dashboard.get",
    dashboard_create => "dashboard.create",
    dashboard_update => "dashboard.update",
    dashboard_delete => "dashboard.delete",

    // discovery: checks, hosts, rules, services
    dcheck_get => "dcheck.get",
    dcheck_exists => "dcheck.exists",
    dhost_get => "dhost.get",
    dhost_exists => "dhost.exists",
    drule_get => "drule.get",
    drule_create => "drule.create",
    drule_update => "drule.update",
    drule_delete => "drule.delete",
    drule_exists => "drule.exists",
    drule_is_readable => "drule.isreadable",
    drule_is_writable => "drule.iswritable",
    dservice_get => "dservice.get",
    dservice_exists => "dservice.exists",

    // event
    event_get => "event.get",
    /// Acknowledge events and optionally leave a message.
    event_acknowledge => "event.acknowledge",

    // graph
    graph_get => "graph.get",
    graph_create => "graph.create",
    graph_update => "graph.update",
    graph_delete => "graph.delete",
    graph_exists => "graph.exists",
    graph_get_objects => "graph.getobjects",
    graphitem_get => "graphitem.get",
    graphprototype_get => "graphprototype.get",
    graphprototype_create => "graphprototype.create",
    graphprototype_update => "graphprototype.update",
    graphprototype_delete => "graphprototype.delete",
    graphprototype_exists => "graphprototype.exists",
    graphprototype_get_objects => "graphprototype.getobjects",

    // history
    /// Retrieve collected history values; the `history` parameter selects
    /// the value type table to read.
    history_get => "history.get",

    // host
    host_get => "host.get",
    host_create => "host.create",
    host_update => "host.update",
    host_delete => "host.delete",
    host_mass_add => "host.massadd",
    host_mass_update => "host.massupdate",
    host_mass_remove => "host.massremove",
    host_exists => "host.exists",
    host_get_objects => "host.getobjects",
    host_is_readable => "host.isreadable",
    host_is_writable => "host.iswritable",

    // hostgroup
    hostgroup_get => "hostgroup.get",
    hostgroup_create => "hostgroup.create",
    hostgroup_update => "hostgroup.update",
    hostgroup_delete => "hostgroup.delete",
    hostgroup_mass_add => "hostgroup.massadd",
    hostgroup_mass_update => "hostgroup.massupdate",
    hostgroup_mass_remove => "hostgroup.massremove",
    hostgroup_exists => "hostgroup.exists",
    hostgroup_get_objects => "hostgroup.getobjects",
    hostgroup_is_readable => "hostgroup.isreadable",
    hostgroup_is_writable => "hostgroup.iswritable",

    // hostinterface
    hostinterface_get => "hostinterface.get",
    hostinterface_create => "hostinterface.create",
    hostinterface_update => "hostinterface.update",
    hostinterface_delete => "hostinterface.delete",
    hostinterface_mass_add => "hostinterface.massadd",
    hostinterface_mass_remove => "hostinterface.massremove",
    hostinterface_replace_host_interfaces => "hostinterface.replacehostinterfaces",

    // hostprototype
    hostprototype_get => "hostprototype.get",
    hostprototype_create => "hostprototype.create",
    hostprototype_update => "hostprototype.update",
    hostprototype_delete => "hostprototype.delete",
    hostprototype_is_readable => "hostprototype.isreadable",
    hostprototype_is_writable => "hostprototype.iswritable",

    // httptest (web scenarios)
    httptest_get => "httptest.get",
    httptest_create => "httptest.create",
    httptest_update => "httptest.update",
    httptest_delete => "httptest.delete",
    httptest_is_readable => "httptest.isreadable",
    httptest_is_writable => "httptest.iswritable",

    // iconmap
    iconmap_get => "iconmap.get",
    iconmap_create => "iconmap.create",
    iconmap_update => "iconmap.update",
    iconmap_delete => "iconmap.delete",
    iconmap_is_readable => "iconmap.isreadable",
    iconmap_is_writable => "iconmap.iswritable",

    // image
    image_get => "image.get",
    image_create => "image.create",
    image_update => "image.update",
    image_delete => "image.delete",
    image_exists => "image.exists",

    // item
    item_get => "item.get",
    item_create => "item.create",
    item_update => "item.update",
    item_delete => "item.delete",
    item_exists => "item.exists",
    item_get_objects => "item.getobjects",
    item_is_readable => "item.isreadable",
    item_is_writable => "item.iswritable",

    // itemprototype
    itemprototype_get => "itemprototype.get",
    itemprototype_create => "itemprototype.create",
    itemprototype_update => "itemprototype.update",
    itemprototype_delete => "itemprototype.delete",
    itemprototype_exists => "itemprototype.exists",
    itemprototype_get_objects => "itemprototype.getobjects",
    itemprototype_is_readable => "itemprototype.isreadable",
    itemprototype_is_writable => "itemprototype.iswritable",

    // maintenance
    maintenance_get => "maintenance.get",
    maintenance_create => "maintenance.create",
    maintenance_update => "maintenance.update",
    maintenance_delete => "maintenance.delete",
    maintenance_exists => "maintenance.exists",

    // map
    map_get => "map.get",
    map_create => "map.create",
    map_update => "map.update",
    map_delete => "map.delete",
    map_exists => "map.exists",
    map_get_objects => "map.getobjects",
    map_is_readable => "map.isreadable",
    map_is_writable => "map.iswritable",

    // mediatype
    mediatype_get => "mediatype.get",
    mediatype_create => "mediatype.create",
    mediatype_update => "mediatype.update",
    mediatype_delete => "mediatype.delete",

    // problem
    problem_get => "problem.get",

    // proxy
    proxy_get => "proxy.get",
    proxy_create => "proxy.create",
    proxy_update => "proxy.update",
    proxy_delete => "proxy.delete",
    proxy_is_readable => "proxy.isreadable",
    proxy_is_writable => "proxy.iswritable",

    // screen
    screen_get => "screen.get",
    screen_create => "screen.create",
    screen_update => "screen.update",
    screen_delete => "screen.delete",
    screen_exists => "screen.exists",

    // screenitem
    screenitem_get => "screenitem.get",
    screenitem_create => "screenitem.create",
    screenitem_update => "screenitem.update",
    screenitem_update_by_position => "screenitem.updatebyposition",
    screenitem_delete => "screenitem.delete",
    screenitem_is_readable => "screenitem.isreadable",
    screenitem_is_writable => "screenitem.iswritable",

    // script
    script_get => "script.get",
    script_create => "script.create",
    script_update => "script.update",
    script_delete => "script.delete",
    /// Run a script on a host and return its output.
    script_execute => "script.execute",
    script_get_scripts_by_hosts => "script.getscriptsbyhosts",

    // service (IT services / SLA)
    service_get => "service.get",
    service_create => "service.create",
    service_update => "service.update",
    service_delete => "service.delete",
    service_add_dependencies => "service.adddependencies",
    service_delete_dependencies => "service.deletedependencies",
    service_add_times => "service.addtimes",
    service_delete_times => "service.deletetimes",
    /// Calculate SLA availability for the given services and intervals.
    service_get_sla => "service.getsla",
    service_is_readable => "service.isreadable",
    service_is_writable => "service.iswritable",

    // task
    task_create => "task.create",

    // template
    template_get => "template.get",
    template_create => "template.create",
    template_update => "template.update",
    template_delete => "template.delete",
    template_mass_add => "template.massadd",
    template_mass_update => "template.massupdate",
    template_mass_remove => "template.massremove",
    template_exists => "template.exists",
    template_get_objects => "template.getobjects",
    template_is_readable => "template.isreadable",
    template_is_writable => "template.iswritable",

    // templatescreen
    templatescreen_get => "templatescreen.get",
    templatescreen_create => "templatescreen.create",
    templatescreen_update => "templatescreen.update",
    templatescreen_delete => "templatescreen.delete",
    templatescreen_copy => "templatescreen.copy",
    templatescreen_is_readable => "templatescreen.isreadable",
    templatescreen_is_writable => "templatescreen.iswritable",
    templatescreenitem_get => "templatescreenitem.get",

    // trend
    trend_get => "trend.get",

    // trigger
    trigger_get => "trigger.get",
    trigger_create => "trigger.create",
    trigger_update => "trigger.update",
    trigger_delete => "trigger.delete",
    trigger_add_dependencies => "trigger.adddependencies",
    trigger_delete_dependencies => "trigger.deletedependencies",
    trigger_exists => "trigger.exists",
    trigger_get_objects => "trigger.getobjects",
    trigger_is_readable => "trigger.isreadable",
    trigger_is_writable => "trigger.iswritable",

    // triggerprototype
    triggerprototype_get => "triggerprototype.get",
    triggerprototype_create => "triggerprototype.create",
    triggerprototype_update => "triggerprototype.update",
    triggerprototype_delete => "triggerprototype.delete",

    // user (login/logout/checkAuthentication live on the client itself)
    user_get => "user.get",
    user_create => "user.create",
    user_update => "user.update",
    user_delete => "user.delete",
    user_update_profile => "user.updateprofile",
    user_add_media => "user.addmedia",
    user_update_media => "user.updatemedia",
    user_delete_media => "user.deletemedia",
    user_is_readable => "user.isreadable",
    user_is_writable => "user.iswritable",

    // usergroup
    usergroup_get => "usergroup.get",
    usergroup_create => "usergroup.create",
    usergroup_update => "usergroup.update",
    usergroup_delete => "usergroup.delete",
    usergroup_mass_add => "usergroup.massadd",
    usergroup_mass_update => "usergroup.massupdate",
    usergroup_mass_remove => "usergroup.massremove",
    usergroup_exists => "usergroup.exists",
    usergroup_is_readable => "usergroup.isreadable",
    usergroup_is_writable => "usergroup.iswritable",

    // usermacro
    usermacro_get => "usermacro.get",
    usermacro_create => "usermacro.create",
    usermacro_update => "usermacro.update",
    usermacro_delete => "usermacro.delete",
    usermacro_create_global => "usermacro.createglobal",
    usermacro_update_global => "usermacro.updateglobal",
    usermacro_delete_global => "usermacro.deleteglobal",

    // usermedia
    usermedia_get => "usermedia.get",

    // valuemap
    valuemap_get => "valuemap.get",
    valuemap_create => "valuemap.create",
    valuemap_update => "valuemap.update",
    valuemap_delete => "valuemap.delete",
}

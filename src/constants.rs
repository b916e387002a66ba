//! Named mirrors of Zabbix server-side enumeration values.
//!
//! Purely data: the server speaks in raw integers (usually serialized as
//! strings) and these constants give them names on the client side. Values
//! track the server's `defines.inc.php`.

// JSON-RPC / API error codes
pub const ZBX_API_ERROR_PARSE: i64 = -32700;
pub const ZBX_API_ERROR_INVALID_REQUEST: i64 = -32600;
pub const ZBX_API_ERROR_NO_METHOD: i64 = -32601;
pub const ZBX_API_ERROR_PARAMETERS: i64 = -32602;
pub const ZBX_API_ERROR_INTERNAL: i64 = -32500;

// Common `output` shortcuts and sort orders
pub const API_OUTPUT_EXTEND: &str = "extend";
pub const API_OUTPUT_COUNT: &str = "count";
pub const ZBX_SORT_UP: &str = "ASC";
pub const ZBX_SORT_DOWN: &str = "DESC";

// Item types
pub const ITEM_TYPE_ZABBIX: i32 = 0;
pub const ITEM_TYPE_SNMPV1: i32 = 1;
pub const ITEM_TYPE_TRAPPER: i32 = 2;
pub const ITEM_TYPE_SIMPLE: i32 = 3;
pub const ITEM_TYPE_SNMPV2C: i32 = 4;
pub const ITEM_TYPE_INTERNAL: i32 = 5;
pub const ITEM_TYPE_SNMPV3: i32 = 6;
pub const ITEM_TYPE_ZABBIX_ACTIVE: i32 = 7;
pub const ITEM_TYPE_AGGREGATE: i32 = 8;
pub const ITEM_TYPE_HTTPTEST: i32 = 9;
pub const ITEM_TYPE_EXTERNAL: i32 = 10;
pub const ITEM_TYPE_DB_MONITOR: i32 = 11;
pub const ITEM_TYPE_IPMI: i32 = 12;
pub const ITEM_TYPE_SSH: i32 = 13;
pub const ITEM_TYPE_TELNET: i32 = 14;
pub const ITEM_TYPE_CALCULATED: i32 = 15;
pub const ITEM_TYPE_JMX: i32 = 16;
pub const ITEM_TYPE_SNMPTRAP: i32 = 17;
pub const ITEM_TYPE_DEPENDENT: i32 = 18;
pub const ITEM_TYPE_HTTPAGENT: i32 = 19;
pub const ITEM_TYPE_SNMP: i32 = 20;
pub const ITEM_TYPE_SCRIPT: i32 = 21;

// Item value types
pub const ITEM_VALUE_TYPE_FLOAT: i32 = 0;
pub const ITEM_VALUE_TYPE_STR: i32 = 1;
pub const ITEM_VALUE_TYPE_LOG: i32 = 2;
pub const ITEM_VALUE_TYPE_UINT64: i32 = 3;
pub const ITEM_VALUE_TYPE_TEXT: i32 = 4;

// Item data types (pre-3.4 servers)
pub const ITEM_DATA_TYPE_DECIMAL: i32 = 0;
pub const ITEM_DATA_TYPE_OCTAL: i32 = 1;
pub const ITEM_DATA_TYPE_HEXADECIMAL: i32 = 2;
pub const ITEM_DATA_TYPE_BOOLEAN: i32 = 3;

// Item status and state
pub const ITEM_STATUS_ACTIVE: i32 = 0;
pub const ITEM_STATUS_DISABLED: i32 = 1;
pub const ITEM_STATUS_NOTSUPPORTED: i32 = 3;
pub const ITEM_STATE_NORMAL: i32 = 0;
pub const ITEM_STATE_NOTSUPPORTED: i32 = 1;

// SSH item authentication
pub const ITEM_AUTHTYPE_PASSWORD: i32 = 0;
pub const ITEM_AUTHTYPE_PUBLICKEY: i32 = 1;

// SNMPv3 security
pub const ITEM_SNMPV3_SECURITYLEVEL_NOAUTHNOPRIV: i32 = 0;
pub const ITEM_SNMPV3_SECURITYLEVEL_AUTHNOPRIV: i32 = 1;
pub const ITEM_SNMPV3_SECURITYLEVEL_AUTHPRIV: i32 = 2;
pub const ITEM_SNMPV3_AUTHPROTOCOL_MD5: i32 = 0;
pub const ITEM_SNMPV3_AUTHPROTOCOL_SHA: i32 = 1;
pub const ITEM_SNMPV3_PRIVPROTOCOL_DES: i32 = 0;
pub const ITEM_SNMPV3_PRIVPROTOCOL_AES: i32 = 1;

// LLD / discovery object flags
pub const ZBX_FLAG_DISCOVERY_NORMAL: i32 = 0;
pub const ZBX_FLAG_DISCOVERY_RULE: i32 = 1;
pub const ZBX_FLAG_DISCOVERY_PROTOTYPE: i32 = 2;
pub const ZBX_FLAG_DISCOVERY_CREATED: i32 = 4;

// Trigger severities
pub const TRIGGER_SEVERITY_NOT_CLASSIFIED: i32 = 0;
pub const TRIGGER_SEVERITY_INFORMATION: i32 = 1;
pub const TRIGGER_SEVERITY_WARNING: i32 = 2;
pub const TRIGGER_SEVERITY_AVERAGE: i32 = 3;
pub const TRIGGER_SEVERITY_HIGH: i32 = 4;
pub const TRIGGER_SEVERITY_DISASTER: i32 = 5;
pub const TRIGGER_SEVERITY_COUNT: i32 = 6;

// Trigger status, value and state
pub const TRIGGER_STATUS_ENABLED: i32 = 0;
pub const TRIGGER_STATUS_DISABLED: i32 = 1;
pub const TRIGGER_VALUE_FALSE: i32 = 0;
pub const TRIGGER_VALUE_TRUE: i32 = 1;
pub const TRIGGER_STATE_NORMAL: i32 = 0;
pub const TRIGGER_STATE_UNKNOWN: i32 = 1;
pub const TRIGGER_MULT_EVENT_DISABLED: i32 = 0;
pub const TRIGGER_MULT_EVENT_ENABLED: i32 = 1;

// Host status (the host table also stores proxies and templates)
pub const HOST_STATUS_MONITORED: i32 = 0;
pub const HOST_STATUS_NOT_MONITORED: i32 = 1;
pub const HOST_STATUS_TEMPLATE: i32 = 3;
pub const HOST_STATUS_PROXY_ACTIVE: i32 = 5;
pub const HOST_STATUS_PROXY_PASSIVE: i32 = 6;

// Host agent availability
pub const HOST_AVAILABLE_UNKNOWN: i32 = 0;
pub const HOST_AVAILABLE_TRUE: i32 = 1;
pub const HOST_AVAILABLE_FALSE: i32 = 2;

// Host maintenance
pub const HOST_MAINTENANCE_STATUS_OFF: i32 = 0;
pub const HOST_MAINTENANCE_STATUS_ON: i32 = 1;
pub const MAINTENANCE_TYPE_NORMAL: i32 = 0;
pub const MAINTENANCE_TYPE_NODATA: i32 = 1;
pub const TIMEPERIOD_TYPE_ONETIME: i32 = 0;
pub const TIMEPERIOD_TYPE_DAILY: i32 = 2;
pub const TIMEPERIOD_TYPE_WEEKLY: i32 = 3;
pub const TIMEPERIOD_TYPE_MONTHLY: i32 = 4;

// Host inventory modes
pub const HOST_INVENTORY_DISABLED: i32 = -1;
pub const HOST_INVENTORY_MANUAL: i32 = 0;
pub const HOST_INVENTORY_AUTOMATIC: i32 = 1;

// Host interfaces
pub const INTERFACE_TYPE_AGENT: i32 = 1;
pub const INTERFACE_TYPE_SNMP: i32 = 2;
pub const INTERFACE_TYPE_IPMI: i32 = 3;
pub const INTERFACE_TYPE_JMX: i32 = 4;
pub const INTERFACE_USE_DNS: i32 = 0;
pub const INTERFACE_USE_IP: i32 = 1;
pub const INTERFACE_SECONDARY: i32 = 0;
pub const INTERFACE_PRIMARY: i32 = 1;

// Event sources and objects
pub const EVENT_SOURCE_TRIGGERS: i32 = 0;
pub const EVENT_SOURCE_DISCOVERY: i32 = 1;
pub const EVENT_SOURCE_AUTO_REGISTRATION: i32 = 2;
pub const EVENT_SOURCE_INTERNAL: i32 = 3;
pub const EVENT_OBJECT_TRIGGER: i32 = 0;
pub const EVENT_OBJECT_DHOST: i32 = 1;
pub const EVENT_OBJECT_DSERVICE: i32 = 2;
pub const EVENT_OBJECT_AUTOREGHOST: i32 = 3;
pub const EVENT_OBJECT_ITEM: i32 = 4;
pub const EVENT_OBJECT_LLDRULE: i32 = 5;
pub const EVENT_NOT_ACKNOWLEDGED: &str = "0";
pub const EVENT_ACKNOWLEDGED: &str = "1";

// event.acknowledge / problem update action bit flags
pub const ZBX_PROBLEM_UPDATE_CLOSE: i32 = 1;
pub const ZBX_PROBLEM_UPDATE_ACKNOWLEDGE: i32 = 2;
pub const ZBX_PROBLEM_UPDATE_MESSAGE: i32 = 4;
pub const ZBX_PROBLEM_UPDATE_SEVERITY: i32 = 8;
pub const ZBX_PROBLEM_UPDATE_UNACKNOWLEDGE: i32 = 16;

// Action condition types
pub const CONDITION_TYPE_HOST_GROUP: i32 = 0;
pub const CONDITION_TYPE_HOST: i32 = 1;
pub const CONDITION_TYPE_TRIGGER: i32 = 2;
pub const CONDITION_TYPE_TRIGGER_NAME: i32 = 3;
pub const CONDITION_TYPE_TRIGGER_SEVERITY: i32 = 4;
pub const CONDITION_TYPE_TRIGGER_VALUE: i32 = 5;
pub const CONDITION_TYPE_TIME_PERIOD: i32 = 6;
pub const CONDITION_TYPE_DHOST_IP: i32 = 7;
pub const CONDITION_TYPE_DSERVICE_TYPE: i32 = 8;
pub const CONDITION_TYPE_DSERVICE_PORT: i32 = 9;
pub const CONDITION_TYPE_DSTATUS: i32 = 10;
pub const CONDITION_TYPE_DUPTIME: i32 = 11;
pub const CONDITION_TYPE_DVALUE: i32 = 12;
pub const CONDITION_TYPE_HOST_TEMPLATE: i32 = 13;
pub const CONDITION_TYPE_EVENT_ACKNOWLEDGED: i32 = 14;
pub const CONDITION_TYPE_APPLICATION: i32 = 15;
pub const CONDITION_TYPE_MAINTENANCE: i32 = 16;
pub const CONDITION_TYPE_DRULE: i32 = 18;
pub const CONDITION_TYPE_DCHECK: i32 = 19;
pub const CONDITION_TYPE_PROXY: i32 = 20;
pub const CONDITION_TYPE_DOBJECT: i32 = 21;
pub const CONDITION_TYPE_HOST_NAME: i32 = 22;
pub const CONDITION_TYPE_EVENT_TYPE: i32 = 23;
pub const CONDITION_TYPE_HOST_METADATA: i32 = 24;

// Action condition operators
pub const CONDITION_OPERATOR_EQUAL: i32 = 0;
pub const CONDITION_OPERATOR_NOT_EQUAL: i32 = 1;
pub const CONDITION_OPERATOR_LIKE: i32 = 2;
pub const CONDITION_OPERATOR_NOT_LIKE: i32 = 3;
pub const CONDITION_OPERATOR_IN: i32 = 4;
pub const CONDITION_OPERATOR_MORE_EQUAL: i32 = 5;
pub const CONDITION_OPERATOR_LESS_EQUAL: i32 = 6;
pub const CONDITION_OPERATOR_NOT_IN: i32 = 7;

// Action operation types
pub const OPERATION_TYPE_MESSAGE: i32 = 0;
pub const OPERATION_TYPE_COMMAND: i32 = 1;
pub const OPERATION_TYPE_HOST_ADD: i32 = 2;
pub const OPERATION_TYPE_HOST_REMOVE: i32 = 3;
pub const OPERATION_TYPE_GROUP_ADD: i32 = 4;
pub const OPERATION_TYPE_GROUP_REMOVE: i32 = 5;
pub const OPERATION_TYPE_TEMPLATE_ADD: i32 = 6;
pub const OPERATION_TYPE_TEMPLATE_REMOVE: i32 = 7;
pub const OPERATION_TYPE_HOST_ENABLE: i32 = 8;
pub const OPERATION_TYPE_HOST_DISABLE: i32 = 9;
pub const OPERATION_TYPE_HOST_INVENTORY: i32 = 10;

// Action status
pub const ACTION_STATUS_ENABLED: i32 = 0;
pub const ACTION_STATUS_DISABLED: i32 = 1;

// Media types
pub const MEDIA_TYPE_EMAIL: i32 = 0;
pub const MEDIA_TYPE_EXEC: i32 = 1;
pub const MEDIA_TYPE_SMS: i32 = 2;
pub const MEDIA_TYPE_JABBER: i32 = 3;
pub const MEDIA_TYPE_WEBHOOK: i32 = 4;
pub const MEDIA_TYPE_EZ_TEXTING: i32 = 100;
pub const MEDIA_TYPE_STATUS_ACTIVE: i32 = 0;
pub const MEDIA_TYPE_STATUS_DISABLED: i32 = 1;
pub const MEDIA_STATUS_ACTIVE: i32 = 0;
pub const MEDIA_STATUS_DISABLED: i32 = 1;

// SMTP security for email media (3.x+)
pub const SMTP_CONNECTION_SECURITY_NONE: i32 = 0;
pub const SMTP_CONNECTION_SECURITY_STARTTLS: i32 = 1;
pub const SMTP_CONNECTION_SECURITY_SSL_TLS: i32 = 2;
pub const SMTP_AUTHENTICATION_NONE: i32 = 0;
pub const SMTP_AUTHENTICATION_NORMAL: i32 = 1;

// User types, group access and status
pub const USER_TYPE_ZABBIX_USER: i32 = 1;
pub const USER_TYPE_ZABBIX_ADMIN: i32 = 2;
pub const USER_TYPE_SUPER_ADMIN: i32 = 3;
pub const GROUP_GUI_ACCESS_SYSTEM: i32 = 0;
pub const GROUP_GUI_ACCESS_INTERNAL: i32 = 1;
pub const GROUP_GUI_ACCESS_DISABLED: i32 = 2;
pub const GROUP_STATUS_ENABLED: i32 = 0;
pub const GROUP_STATUS_DISABLED: i32 = 1;
pub const GROUP_DEBUG_MODE_DISABLED: i32 = 0;
pub const GROUP_DEBUG_MODE_ENABLED: i32 = 1;

// Permission levels
pub const PERM_DENY: i32 = 0;
pub const PERM_READ: i32 = 2;
pub const PERM_READ_WRITE: i32 = 3;

// Frontend authentication methods
pub const ZBX_AUTH_INTERNAL: i32 = 0;
pub const ZBX_AUTH_LDAP: i32 = 1;
pub const ZBX_AUTH_HTTP: i32 = 2;

// Graphs
pub const GRAPH_TYPE_NORMAL: i32 = 0;
pub const GRAPH_TYPE_STACKED: i32 = 1;
pub const GRAPH_TYPE_PIE: i32 = 2;
pub const GRAPH_TYPE_EXPLODED: i32 = 3;
pub const GRAPH_YAXIS_TYPE_CALCULATED: i32 = 0;
pub const GRAPH_YAXIS_TYPE_FIXED: i32 = 1;
pub const GRAPH_YAXIS_TYPE_ITEM_VALUE: i32 = 2;
pub const GRAPH_YAXIS_SIDE_LEFT: i32 = 0;
pub const GRAPH_YAXIS_SIDE_RIGHT: i32 = 1;
pub const GRAPH_ITEM_SIMPLE: i32 = 0;
pub const GRAPH_ITEM_SUM: i32 = 2;
pub const GRAPH_ITEM_DRAWTYPE_LINE: i32 = 0;
pub const GRAPH_ITEM_DRAWTYPE_FILLED_REGION: i32 = 1;
pub const GRAPH_ITEM_DRAWTYPE_BOLD_LINE: i32 = 2;
pub const GRAPH_ITEM_DRAWTYPE_DOT: i32 = 3;
pub const GRAPH_ITEM_DRAWTYPE_DASHED_LINE: i32 = 4;
pub const GRAPH_ITEM_DRAWTYPE_GRADIENT_LINE: i32 = 5;
pub const CALC_FNC_MIN: i32 = 1;
pub const CALC_FNC_AVG: i32 = 2;
pub const CALC_FNC_MAX: i32 = 4;
pub const CALC_FNC_ALL: i32 = 7;
pub const CALC_FNC_LST: i32 = 9;

// Screens
pub const SCREEN_RESOURCE_GRAPH: i32 = 0;
pub const SCREEN_RESOURCE_SIMPLE_GRAPH: i32 = 1;
pub const SCREEN_RESOURCE_MAP: i32 = 2;
pub const SCREEN_RESOURCE_PLAIN_TEXT: i32 = 3;
pub const SCREEN_RESOURCE_HOSTS_INFO: i32 = 4;
pub const SCREEN_RESOURCE_TRIGGERS_INFO: i32 = 5;
pub const SCREEN_RESOURCE_SERVER_INFO: i32 = 6;
pub const SCREEN_RESOURCE_CLOCK: i32 = 7;
pub const SCREEN_RESOURCE_SCREEN: i32 = 8;
pub const SCREEN_RESOURCE_TRIGGERS_OVERVIEW: i32 = 9;
pub const SCREEN_RESOURCE_DATA_OVERVIEW: i32 = 10;
pub const SCREEN_RESOURCE_URL: i32 = 11;
pub const SCREEN_RESOURCE_ACTIONS: i32 = 12;
pub const SCREEN_RESOURCE_EVENTS: i32 = 13;
pub const SCREEN_RESOURCE_HOSTGROUP_TRIGGERS: i32 = 14;
pub const SCREEN_RESOURCE_SYSTEM_STATUS: i32 = 15;
pub const SCREEN_RESOURCE_HOST_TRIGGERS: i32 = 16;

// Maps
pub const SYSMAP_ELEMENT_TYPE_HOST: i32 = 0;
pub const SYSMAP_ELEMENT_TYPE_MAP: i32 = 1;
pub const SYSMAP_ELEMENT_TYPE_TRIGGER: i32 = 2;
pub const SYSMAP_ELEMENT_TYPE_HOST_GROUP: i32 = 3;
pub const SYSMAP_ELEMENT_TYPE_IMAGE: i32 = 4;
pub const MAP_LABEL_TYPE_LABEL: i32 = 0;
pub const MAP_LABEL_TYPE_IP: i32 = 1;
pub const MAP_LABEL_TYPE_NAME: i32 = 2;
pub const MAP_LABEL_TYPE_STATUS: i32 = 3;
pub const MAP_LABEL_TYPE_NOTHING: i32 = 4;
pub const MAP_LABEL_TYPE_CUSTOM: i32 = 5;

// Images
pub const IMAGE_TYPE_ICON: i32 = 1;
pub const IMAGE_TYPE_BACKGROUND: i32 = 2;

// Network discovery
pub const SVC_SSH: i32 = 0;
pub const SVC_LDAP: i32 = 1;
pub const SVC_SMTP: i32 = 2;
pub const SVC_FTP: i32 = 3;
pub const SVC_HTTP: i32 = 4;
pub const SVC_POP: i32 = 5;
pub const SVC_NNTP: i32 = 6;
pub const SVC_IMAP: i32 = 7;
pub const SVC_TCP: i32 = 8;
pub const SVC_AGENT: i32 = 9;
pub const SVC_SNMPV1: i32 = 10;
pub const SVC_SNMPV2C: i32 = 11;
pub const SVC_ICMPPING: i32 = 12;
pub const SVC_SNMPV3: i32 = 13;
pub const SVC_HTTPS: i32 = 14;
pub const SVC_TELNET: i32 = 15;
pub const DRULE_STATUS_ACTIVE: i32 = 0;
pub const DRULE_STATUS_DISABLED: i32 = 1;
pub const DOBJECT_STATUS_UP: i32 = 0;
pub const DOBJECT_STATUS_DOWN: i32 = 1;
pub const DOBJECT_STATUS_DISCOVER: i32 = 2;
pub const DOBJECT_STATUS_LOST: i32 = 3;
pub const DHOST_STATUS_ACTIVE: i32 = 0;
pub const DHOST_STATUS_DISABLED: i32 = 1;
pub const DSVC_STATUS_ACTIVE: i32 = 0;
pub const DSVC_STATUS_DISABLED: i32 = 1;

// Web scenarios
pub const HTTPTEST_AUTH_NONE: i32 = 0;
pub const HTTPTEST_AUTH_BASIC: i32 = 1;
pub const HTTPTEST_AUTH_NTLM: i32 = 2;
pub const HTTPTEST_STATUS_ACTIVE: i32 = 0;
pub const HTTPTEST_STATUS_DISABLED: i32 = 1;

// Scripts
pub const ZBX_SCRIPT_TYPE_CUSTOM_SCRIPT: i32 = 0;
pub const ZBX_SCRIPT_TYPE_IPMI: i32 = 1;
pub const ZBX_SCRIPT_TYPE_SSH: i32 = 2;
pub const ZBX_SCRIPT_TYPE_TELNET: i32 = 3;
pub const ZBX_SCRIPT_TYPE_GLOBAL_SCRIPT: i32 = 4;
pub const ZBX_SCRIPT_TYPE_WEBHOOK: i32 = 5;
pub const ZBX_SCRIPT_EXECUTE_ON_AGENT: i32 = 0;
pub const ZBX_SCRIPT_EXECUTE_ON_SERVER: i32 = 1;
pub const ZBX_SCRIPT_EXECUTE_ON_PROXY: i32 = 2;

// IT services
pub const SERVICE_ALGORITHM_NONE: i32 = 0;
pub const SERVICE_ALGORITHM_MAX: i32 = 1;
pub const SERVICE_ALGORITHM_MIN: i32 = 2;
pub const SERVICE_SHOW_SLA_OFF: i32 = 0;
pub const SERVICE_SHOW_SLA_ON: i32 = 1;
pub const SERVICE_STATUS_OK: i32 = 0;

// Macro types
pub const ZBX_MACRO_TYPE_TEXT: i32 = 0;
pub const ZBX_MACRO_TYPE_SECRET: i32 = 1;
pub const ZBX_MACRO_TYPE_VAULT: i32 = 2;

// Proxy passive/active flags on the proxy API
pub const PROXY_STATUS_ACTIVE: i32 = 5;
pub const PROXY_STATUS_PASSIVE: i32 = 6;

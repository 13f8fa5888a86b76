//! Static tool catalog for the Orbit control-plane API.
//!
//! One [`ToolDef`] per exposed endpoint, grouped by API area. The generic
//! runtime reads the definition to build the HTTP request, so the tables
//! below are the entire per-endpoint surface.

use crate::semantics::annotations_for_method;
use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};
use std::sync::Arc;

/// Where a tool argument ends up in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` segment of the path template.
    Path,
    /// Appended as a query-string pair.
    Query,
    /// Placed as a field of the JSON request body.
    Body,
}

/// One declared tool argument.
#[derive(Debug, Clone, Copy)]
pub struct ParamDef {
    pub name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
    /// JSON Schema `type` for the input schema.
    pub kind: &'static str,
    pub description: &'static str,
}

impl ParamDef {
    const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            required: true,
            kind: "string",
            description,
        }
    }

    const fn query(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            required: false,
            kind,
            description,
        }
    }

    const fn query_required(
        name: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            required: true,
            kind,
            description,
        }
    }

    const fn body(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Body,
            required: false,
            kind,
            description,
        }
    }

    const fn body_required(
        name: &'static str,
        kind: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            location: ParamLocation::Body,
            required: true,
            kind,
            description,
        }
    }
}

/// One exposed tool: an HTTP endpoint plus its argument declarations.
#[derive(Debug, Clone, Copy)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub method: &'static str,
    /// Path template relative to the API base, with `{param}` placeholders.
    pub path: &'static str,
    pub params: &'static [ParamDef],
    /// Key to unwrap list payloads from when the response is neither a bare
    /// array nor a `result`/`data` envelope.
    pub hint: Option<&'static str>,
    /// Noun used in success messages, e.g. "site".
    pub noun: &'static str,
}

const SITE_ID: ParamDef = ParamDef::path("site_id", "Identifier of the site");

pub static SITES: &[ToolDef] = &[
    ToolDef {
        name: "list_sites",
        description: "List all sites on the account",
        method: "GET",
        path: "/sites",
        params: &[
            ParamDef::query("search", "string", "Filter sites by name"),
            ParamDef::query("page", "integer", "Page number"),
            ParamDef::query("per_page", "integer", "Results per page"),
        ],
        hint: Some("sites"),
        noun: "site",
    },
    ToolDef {
        name: "get_site",
        description: "Get details for a single site",
        method: "GET",
        path: "/sites/{site_id}",
        params: &[SITE_ID],
        hint: None,
        noun: "site",
    },
    ToolDef {
        name: "create_site",
        description: "Create a new site",
        method: "POST",
        path: "/sites",
        params: &[
            ParamDef::body_required("name", "string", "Name of the new site"),
            ParamDef::body("location", "string", "Datacenter location code"),
            ParamDef::body("plan_id", "string", "Plan to create the site on"),
        ],
        hint: None,
        noun: "site",
    },
    ToolDef {
        name: "update_site",
        description: "Update a site's attributes",
        method: "PATCH",
        path: "/sites/{site_id}",
        params: &[SITE_ID, ParamDef::body("name", "string", "New site name")],
        hint: None,
        noun: "site",
    },
    ToolDef {
        name: "delete_site",
        description: "Permanently delete a site",
        method: "DELETE",
        path: "/sites/{site_id}",
        params: &[SITE_ID],
        hint: None,
        noun: "site",
    },
    ToolDef {
        name: "get_site_status",
        description: "Get the operational status of a site",
        method: "GET",
        path: "/sites/{site_id}/status",
        params: &[SITE_ID],
        hint: None,
        noun: "status",
    },
    ToolDef {
        name: "clone_site",
        description: "Clone an existing site into a new one",
        method: "POST",
        path: "/sites/clone",
        params: &[
            ParamDef::body_required("site_id", "string", "Site to clone from"),
            ParamDef::body_required("name", "string", "Name for the cloned site"),
        ],
        hint: None,
        noun: "site",
    },
    ToolDef {
        name: "get_site_settings",
        description: "Get a site's configuration settings",
        method: "GET",
        path: "/sites/{site_id}/settings",
        params: &[SITE_ID],
        hint: None,
        noun: "settings",
    },
    ToolDef {
        name: "update_site_settings",
        description: "Update a site's configuration settings",
        method: "PATCH",
        path: "/sites/{site_id}/settings",
        params: &[
            SITE_ID,
            ParamDef::body("settings", "object", "Settings fields to change"),
        ],
        hint: None,
        noun: "settings",
    },
    ToolDef {
        name: "list_plans",
        description: "List available hosting plans",
        method: "GET",
        path: "/plans",
        params: &[ParamDef::query("currency", "string", "Currency code for pricing")],
        hint: Some("plans"),
        noun: "plan",
    },
    ToolDef {
        name: "get_plan",
        description: "Get details of one hosting plan",
        method: "GET",
        path: "/plans/{plan_id}",
        params: &[ParamDef::path("plan_id", "Identifier of the plan")],
        hint: Some("plan"),
        noun: "plan",
    },
    ToolDef {
        name: "list_locations",
        description: "List available datacenter locations",
        method: "GET",
        path: "/sites/locations",
        params: &[],
        hint: Some("locations"),
        noun: "location",
    },
    ToolDef {
        name: "get_location",
        description: "Get details of one datacenter location",
        method: "GET",
        path: "/sites/locations/{location_id}",
        params: &[ParamDef::path("location_id", "Identifier of the location")],
        hint: Some("location"),
        noun: "location",
    },
    ToolDef {
        name: "change_site_plan",
        description: "Move a site to a different hosting plan",
        method: "PATCH",
        path: "/sites/{site_id}/plan",
        params: &[
            SITE_ID,
            ParamDef::body_required("plan_id", "string", "Target plan identifier"),
        ],
        hint: None,
        noun: "plan",
    },
];

pub static BACKUPS: &[ToolDef] = &[
    ToolDef {
        name: "list_backups",
        description: "List on-server backups for a site",
        method: "GET",
        path: "/sites/{site_id}/backups",
        params: &[SITE_ID],
        hint: Some("backups"),
        noun: "backup",
    },
    ToolDef {
        name: "get_backup",
        description: "Get details of one backup",
        method: "GET",
        path: "/sites/{site_id}/backups/{backup_id}",
        params: &[SITE_ID, ParamDef::path("backup_id", "Identifier of the backup")],
        hint: None,
        noun: "backup",
    },
    ToolDef {
        name: "create_backup",
        description: "Create a new on-demand backup of a site",
        method: "POST",
        path: "/sites/{site_id}/backups",
        params: &[SITE_ID, ParamDef::body("label", "string", "Label for the backup")],
        hint: None,
        noun: "backup",
    },
    ToolDef {
        name: "delete_backup",
        description: "Delete a backup",
        method: "DELETE",
        path: "/sites/{site_id}/backups/{backup_id}",
        params: &[SITE_ID, ParamDef::path("backup_id", "Identifier of the backup")],
        hint: None,
        noun: "backup",
    },
    ToolDef {
        name: "restore_backup",
        description: "Restore a site from a backup",
        method: "POST",
        path: "/sites/{site_id}/backups/{backup_id}/restore",
        params: &[SITE_ID, ParamDef::path("backup_id", "Backup to restore from")],
        hint: None,
        noun: "restore",
    },
    ToolDef {
        name: "download_backup",
        description: "Request a download link for a backup",
        method: "POST",
        path: "/sites/{site_id}/backups/{backup_id}/download",
        params: &[SITE_ID, ParamDef::path("backup_id", "Backup to download")],
        hint: None,
        noun: "download",
    },
    ToolDef {
        name: "get_backup_schedule",
        description: "Get the automatic backup schedule for a site",
        method: "GET",
        path: "/sites/{site_id}/backup-schedule",
        params: &[SITE_ID],
        hint: None,
        noun: "schedule",
    },
    ToolDef {
        name: "set_backup_schedule",
        description: "Create or replace the automatic backup schedule",
        method: "POST",
        path: "/sites/{site_id}/backup-schedule",
        params: &[
            SITE_ID,
            ParamDef::body_required("frequency", "string", "daily, weekly, or monthly"),
            ParamDef::body("retention", "integer", "Number of backups to keep"),
        ],
        hint: None,
        noun: "schedule",
    },
    ToolDef {
        name: "disable_backup_schedule",
        description: "Disable automatic backups for a site",
        method: "DELETE",
        path: "/sites/{site_id}/backup-schedule",
        params: &[SITE_ID],
        hint: None,
        noun: "schedule",
    },
    ToolDef {
        name: "list_cloud_backups",
        description: "List off-site cloud backups for a site",
        method: "GET",
        path: "/sites/{site_id}/cloud-backups",
        params: &[SITE_ID],
        hint: Some("cloud_backups"),
        noun: "cloud backup",
    },
    ToolDef {
        name: "create_cloud_backup",
        description: "Create a new cloud backup of a site",
        method: "POST",
        path: "/sites/{site_id}/cloud-backups",
        params: &[
            SITE_ID,
            ParamDef::body("name", "string", "Name for the backup"),
            ParamDef::body("description", "string", "Description of the backup"),
            ParamDef::body("encrypt", "boolean", "Encrypt the backup, defaults to true"),
        ],
        hint: None,
        noun: "cloud backup",
    },
    ToolDef {
        name: "get_cloud_backup",
        description: "Get details of one cloud backup",
        method: "GET",
        path: "/sites/{site_id}/cloud-backups/{backup_id}",
        params: &[SITE_ID, ParamDef::path("backup_id", "Identifier of the cloud backup")],
        hint: None,
        noun: "cloud backup",
    },
    ToolDef {
        name: "delete_cloud_backup",
        description: "Delete a cloud backup",
        method: "DELETE",
        path: "/sites/{site_id}/cloud-backups/{backup_id}",
        params: &[SITE_ID, ParamDef::path("backup_id", "Identifier of the cloud backup")],
        hint: None,
        noun: "cloud backup",
    },
    ToolDef {
        name: "download_cloud_backup",
        description: "Request a download link for a cloud backup",
        method: "GET",
        path: "/sites/{site_id}/cloud-backups/{backup_id}/download",
        params: &[SITE_ID, ParamDef::path("backup_id", "Cloud backup to download")],
        hint: None,
        noun: "download",
    },
    ToolDef {
        name: "restore_cloud_backup",
        description: "Restore a site from a cloud backup",
        method: "POST",
        path: "/sites/{site_id}/cloud-backups/{backup_id}/restore",
        params: &[SITE_ID, ParamDef::path("backup_id", "Cloud backup to restore from")],
        hint: None,
        noun: "restore",
    },
];

pub static DOMAINS: &[ToolDef] = &[
    ToolDef {
        name: "list_domains",
        description: "List domains attached to a site",
        method: "GET",
        path: "/sites/{site_id}/domains",
        params: &[SITE_ID],
        hint: Some("domains"),
        noun: "domain",
    },
    ToolDef {
        name: "add_domain",
        description: "Attach a domain to a site",
        method: "POST",
        path: "/sites/{site_id}/domains",
        params: &[
            SITE_ID,
            ParamDef::body_required("domain", "string", "Fully qualified domain name"),
        ],
        hint: None,
        noun: "domain",
    },
    ToolDef {
        name: "remove_domain",
        description: "Detach a domain from a site",
        method: "DELETE",
        path: "/sites/{site_id}/domains/{domain_id}",
        params: &[SITE_ID, ParamDef::path("domain_id", "Identifier of the domain")],
        hint: None,
        noun: "domain",
    },
    ToolDef {
        name: "get_main_domain",
        description: "Get the primary domain of a site",
        method: "GET",
        path: "/sites/{site_id}/maindomain",
        params: &[SITE_ID],
        hint: None,
        noun: "domain",
    },
    ToolDef {
        name: "set_main_domain",
        description: "Set the primary domain of a site",
        method: "POST",
        path: "/sites/{site_id}/maindomain",
        params: &[
            SITE_ID,
            ParamDef::body_required("domain", "string", "Domain to promote to primary"),
        ],
        hint: None,
        noun: "domain",
    },
    ToolDef {
        name: "update_main_domain",
        description: "Update primary-domain settings such as SSL mode",
        method: "PUT",
        path: "/sites/{site_id}/maindomain",
        params: &[
            SITE_ID,
            ParamDef::body("domain", "string", "Primary domain name"),
            ParamDef::body("ssl", "string", "SSL mode for the primary domain"),
        ],
        hint: None,
        noun: "domain",
    },
    ToolDef {
        name: "get_edge_settings",
        description: "Get CDN edge settings for a domain",
        method: "GET",
        path: "/sites/{site_id}/domains/{domain_id}/edge_settings",
        params: &[SITE_ID, ParamDef::path("domain_id", "Identifier of the domain")],
        hint: None,
        noun: "settings",
    },
    ToolDef {
        name: "update_edge_settings",
        description: "Update CDN edge settings for a domain",
        method: "PATCH",
        path: "/sites/{site_id}/domains/{domain_id}/edge_settings",
        params: &[
            SITE_ID,
            ParamDef::path("domain_id", "Identifier of the domain"),
            ParamDef::body("settings", "object", "Edge setting fields to change"),
        ],
        hint: None,
        noun: "settings",
    },
];

pub static WORDPRESS: &[ToolDef] = &[
    ToolDef {
        name: "list_plugins",
        description: "List WordPress plugins installed on a site",
        method: "GET",
        path: "/sites/{site_id}/plugins",
        params: &[SITE_ID],
        hint: Some("plugins"),
        noun: "plugin",
    },
    ToolDef {
        name: "install_plugin",
        description: "Install a WordPress plugin",
        method: "POST",
        path: "/sites/{site_id}/plugins",
        params: &[
            SITE_ID,
            ParamDef::body_required("plugin", "string", "Plugin slug to install"),
        ],
        hint: None,
        noun: "plugin",
    },
    ToolDef {
        name: "update_plugin",
        description: "Update an installed WordPress plugin",
        method: "PUT",
        path: "/sites/{site_id}/plugins",
        params: &[
            SITE_ID,
            ParamDef::body_required("plugin", "string", "Plugin slug to update"),
        ],
        hint: None,
        noun: "plugin",
    },
    ToolDef {
        name: "set_plugin_status",
        description: "Activate or deactivate a WordPress plugin",
        method: "PATCH",
        path: "/sites/{site_id}/plugins",
        params: &[
            SITE_ID,
            ParamDef::body_required("plugin", "string", "Plugin slug"),
            ParamDef::body_required("status", "string", "active or inactive"),
        ],
        hint: None,
        noun: "plugin",
    },
    ToolDef {
        name: "uninstall_plugin",
        description: "Uninstall a WordPress plugin",
        method: "DELETE",
        path: "/sites/{site_id}/plugins",
        params: &[
            SITE_ID,
            ParamDef::body_required("plugin", "string", "Plugin slug to remove"),
        ],
        hint: None,
        noun: "plugin",
    },
    ToolDef {
        name: "search_plugins",
        description: "Search the plugin directory",
        method: "GET",
        path: "/sites/{site_id}/plugins/search",
        params: &[
            SITE_ID,
            ParamDef::query("query", "string", "Search term"),
        ],
        hint: Some("plugins"),
        noun: "plugin",
    },
    ToolDef {
        name: "list_themes",
        description: "List WordPress themes installed on a site",
        method: "GET",
        path: "/sites/{site_id}/themes",
        params: &[SITE_ID],
        hint: Some("themes"),
        noun: "theme",
    },
    ToolDef {
        name: "install_theme",
        description: "Install a WordPress theme",
        method: "POST",
        path: "/sites/{site_id}/themes",
        params: &[
            SITE_ID,
            ParamDef::body_required("theme", "string", "Theme slug to install"),
        ],
        hint: None,
        noun: "theme",
    },
    ToolDef {
        name: "activate_theme",
        description: "Activate an installed WordPress theme",
        method: "PATCH",
        path: "/sites/{site_id}/themes",
        params: &[
            SITE_ID,
            ParamDef::body_required("theme", "string", "Theme slug to activate"),
        ],
        hint: None,
        noun: "theme",
    },
    ToolDef {
        name: "uninstall_theme",
        description: "Uninstall a WordPress theme",
        method: "DELETE",
        path: "/sites/{site_id}/themes",
        params: &[
            SITE_ID,
            ParamDef::body_required("theme", "string", "Theme slug to remove"),
        ],
        hint: None,
        noun: "theme",
    },
    ToolDef {
        name: "get_wp_status",
        description: "Get WordPress core status and version for a site",
        method: "GET",
        path: "/sites/{site_id}/wp/status",
        params: &[SITE_ID],
        hint: None,
        noun: "status",
    },
    ToolDef {
        name: "get_wp_login_url",
        description: "Get a one-time WordPress admin login URL for a site",
        method: "GET",
        path: "/sites/{site_id}/wp_login",
        params: &[SITE_ID],
        hint: None,
        noun: "login URL",
    },
    ToolDef {
        name: "run_wp_cli",
        description: "Run a WP-CLI command on a site",
        method: "POST",
        path: "/sites/{site_id}/wpcli",
        params: &[
            SITE_ID,
            ParamDef::body_required("command", "string", "WP-CLI command line to run"),
        ],
        hint: None,
        noun: "command",
    },
];

pub static PERFORMANCE: &[ToolDef] = &[
    ToolDef {
        name: "purge_cache",
        description: "Purge specific files from the site cache",
        method: "POST",
        path: "/sites/{site_id}/cache/purge",
        params: &[
            SITE_ID,
            ParamDef::body("files", "array", "URLs or paths to purge"),
        ],
        hint: None,
        noun: "purge",
    },
    ToolDef {
        name: "purge_all_cache",
        description: "Purge the entire cache for a site",
        method: "POST",
        path: "/sites/{site_id}/cache/purge_everything",
        params: &[SITE_ID],
        hint: None,
        noun: "purge",
    },
    ToolDef {
        name: "get_cdn_requests",
        description: "Get CDN request counts for a site",
        method: "GET",
        path: "/reporting/sites/{site_id}/cdn-requests",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_cdn_cache_status",
        description: "Get CDN cache hit/miss breakdown for a site",
        method: "GET",
        path: "/reporting/sites/{site_id}/cdn-cache-status",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_bandwidth_usage",
        description: "Get bandwidth usage over time for a site",
        method: "GET",
        path: "/reporting/sites/{site_id}/bandwidth/usage",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_top_bandwidth_usage",
        description: "Get the heaviest bandwidth consumers for a site",
        method: "GET",
        path: "/reporting/sites/{site_id}/bandwidth/top-usage",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_visitor_stats",
        description: "Get visitor statistics for a site",
        method: "GET",
        path: "/reporting/sites/{site_id}/visitors",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
];

pub static BILLING: &[ToolDef] = &[
    ToolDef {
        name: "list_invoices",
        description: "List invoices for the account",
        method: "GET",
        path: "/billing/invoices",
        params: &[
            ParamDef::query("page", "integer", "Page number"),
            ParamDef::query("per_page", "integer", "Results per page"),
        ],
        hint: Some("invoices"),
        noun: "invoice",
    },
    ToolDef {
        name: "get_invoice",
        description: "Get one invoice",
        method: "GET",
        path: "/billing/invoices/{invoice_id}",
        params: &[ParamDef::path("invoice_id", "Identifier of the invoice")],
        hint: None,
        noun: "invoice",
    },
    ToolDef {
        name: "download_invoice_pdf",
        description: "Get a PDF download link for an invoice",
        method: "GET",
        path: "/billing/invoices/{invoice_id}/pdf",
        params: &[ParamDef::path("invoice_id", "Identifier of the invoice")],
        hint: Some("pdf"),
        noun: "download",
    },
    ToolDef {
        name: "list_payment_methods",
        description: "List payment methods on file",
        method: "GET",
        path: "/billing/payment-methods",
        params: &[],
        hint: Some("payment_methods"),
        noun: "payment method",
    },
    ToolDef {
        name: "add_payment_method",
        description: "Add a payment method to the account",
        method: "POST",
        path: "/billing/payment-methods",
        params: &[
            ParamDef::body_required("payment_token", "string", "Tokenized payment details"),
            ParamDef::body("set_as_default", "boolean", "Make this the default payment method"),
        ],
        hint: None,
        noun: "payment method",
    },
    ToolDef {
        name: "remove_payment_method",
        description: "Remove a payment method",
        method: "DELETE",
        path: "/billing/payment-methods/{payment_method_id}",
        params: &[ParamDef::path("payment_method_id", "Identifier of the payment method")],
        hint: None,
        noun: "payment method",
    },
    ToolDef {
        name: "list_billing_addresses",
        description: "List billing addresses on file",
        method: "GET",
        path: "/billing/addresses",
        params: &[],
        hint: Some("addresses"),
        noun: "address",
    },
    ToolDef {
        name: "list_products",
        description: "List purchasable products and add-ons",
        method: "GET",
        path: "/billing/products",
        params: &[],
        hint: Some("products"),
        noun: "product",
    },
    ToolDef {
        name: "get_account_usage",
        description: "Get resource usage across the account",
        method: "GET",
        path: "/account/usage",
        params: &[],
        hint: None,
        noun: "usage",
    },
    ToolDef {
        name: "list_account_users",
        description: "List users with access to the account",
        method: "GET",
        path: "/account/users",
        params: &[],
        hint: Some("users"),
        noun: "user",
    },
    ToolDef {
        name: "invite_account_user",
        description: "Invite a user to the account",
        method: "POST",
        path: "/account/users",
        params: &[
            ParamDef::body_required("email", "string", "Email address to invite"),
            ParamDef::body("role", "string", "Role to grant the new user"),
        ],
        hint: None,
        noun: "user",
    },
    ToolDef {
        name: "remove_account_user",
        description: "Remove a user from the account",
        method: "DELETE",
        path: "/account/users/{user_id}",
        params: &[ParamDef::path("user_id", "Identifier of the user")],
        hint: None,
        noun: "user",
    },
];

pub static ACCESS: &[ToolDef] = &[
    ToolDef {
        name: "list_ssh_keys",
        description: "List SSH keys authorized for a site",
        method: "GET",
        path: "/sites/{site_id}/ssh-keys",
        params: &[SITE_ID],
        hint: Some("ssh_keys"),
        noun: "SSH key",
    },
    ToolDef {
        name: "add_ssh_key",
        description: "Add an SSH public key to a site",
        method: "POST",
        path: "/sites/{site_id}/ssh-keys",
        params: &[
            SITE_ID,
            ParamDef::body_required("key", "string", "SSH public key material"),
            ParamDef::body("label", "string", "Label for the key"),
        ],
        hint: None,
        noun: "SSH key",
    },
    ToolDef {
        name: "authorize_ssh_key",
        description: "Authorize an existing SSH key for a site",
        method: "POST",
        path: "/sites/{site_id}/ssh-keys/authorize",
        params: &[
            SITE_ID,
            ParamDef::body_required("key_id", "string", "Identifier of the key to authorize"),
        ],
        hint: None,
        noun: "SSH key",
    },
    ToolDef {
        name: "remove_ssh_key",
        description: "Remove an SSH key from a site",
        method: "DELETE",
        path: "/sites/{site_id}/ssh-keys",
        params: &[
            SITE_ID,
            ParamDef::body_required("key_id", "string", "Identifier of the key to remove"),
        ],
        hint: None,
        noun: "SSH key",
    },
    ToolDef {
        name: "list_ftp_accounts",
        description: "List FTP accounts for a site",
        method: "GET",
        path: "/sites/{site_id}/ftp-accounts",
        params: &[SITE_ID],
        hint: Some("ftp_accounts"),
        noun: "FTP account",
    },
    ToolDef {
        name: "create_ftp_account",
        description: "Create an FTP account for a site",
        method: "POST",
        path: "/sites/{site_id}/ftp-accounts",
        params: &[
            SITE_ID,
            ParamDef::body_required("username", "string", "FTP username"),
            ParamDef::body_required("password", "string", "FTP password"),
            ParamDef::body("path", "string", "Root directory for the account"),
        ],
        hint: None,
        noun: "FTP account",
    },
    ToolDef {
        name: "delete_ftp_account",
        description: "Delete an FTP account from a site",
        method: "DELETE",
        path: "/sites/{site_id}/ftp-accounts",
        params: &[
            SITE_ID,
            ParamDef::body_required("username", "string", "FTP username to remove"),
        ],
        hint: None,
        noun: "FTP account",
    },
    ToolDef {
        name: "list_files",
        description: "List files in a site's file manager",
        method: "GET",
        path: "/sites/{site_id}/file-manager/files",
        params: &[
            SITE_ID,
            ParamDef::query("path", "string", "Directory to list, defaults to the site root"),
        ],
        hint: Some("files"),
        noun: "file",
    },
    ToolDef {
        name: "upload_file",
        description: "Upload a file to a site",
        method: "POST",
        path: "/sites/{site_id}/files",
        params: &[
            SITE_ID,
            ParamDef::body_required("path", "string", "Remote destination path"),
            ParamDef::body_required("content", "string", "File content"),
            ParamDef::body("overwrite", "boolean", "Overwrite an existing file"),
        ],
        hint: Some("file"),
        noun: "file",
    },
    ToolDef {
        name: "delete_file",
        description: "Delete a file from a site",
        method: "DELETE",
        path: "/sites/{site_id}/files",
        params: &[
            SITE_ID,
            ParamDef::query_required("path", "string", "Path of the file to delete"),
        ],
        hint: None,
        noun: "file",
    },
    ToolDef {
        name: "compress_files",
        description: "Compress files or folders into an archive",
        method: "POST",
        path: "/sites/{site_id}/files/compress",
        params: &[
            SITE_ID,
            ParamDef::body_required("paths", "array", "Files and folders to compress"),
            ParamDef::body_required("archive_name", "string", "Name for the archive"),
            ParamDef::body("type", "string", "Archive type: zip, tar, or tar.gz"),
        ],
        hint: Some("archive"),
        noun: "archive",
    },
    ToolDef {
        name: "extract_archive",
        description: "Extract an archive on a site",
        method: "POST",
        path: "/sites/{site_id}/files/extract",
        params: &[
            SITE_ID,
            ParamDef::body_required("archive_path", "string", "Path of the archive to extract"),
            ParamDef::body("destination", "string", "Destination directory"),
        ],
        hint: None,
        noun: "archive",
    },
    ToolDef {
        name: "create_staging",
        description: "Create a staging copy of a site",
        method: "POST",
        path: "/sites/{site_id}/staging",
        params: &[SITE_ID],
        hint: None,
        noun: "staging site",
    },
    ToolDef {
        name: "publish_staging",
        description: "Publish staging changes to the live site",
        method: "POST",
        path: "/sites/{site_id}/staging/publish",
        params: &[SITE_ID],
        hint: None,
        noun: "staging site",
    },
    ToolDef {
        name: "delete_staging",
        description: "Delete a site's staging copy",
        method: "DELETE",
        path: "/sites/{site_id}/staging",
        params: &[SITE_ID],
        hint: None,
        noun: "staging site",
    },
    ToolDef {
        name: "get_phpmyadmin_login",
        description: "Get a phpMyAdmin login URL for a site's database",
        method: "GET",
        path: "/sites/{site_id}/pma_login",
        params: &[SITE_ID],
        hint: None,
        noun: "login URL",
    },
    ToolDef {
        name: "get_password_protection",
        description: "Get password-protection status for a site",
        method: "GET",
        path: "/sites/{site_id}/password-protection",
        params: &[SITE_ID],
        hint: None,
        noun: "protection",
    },
    ToolDef {
        name: "set_password_protection",
        description: "Enable or disable password protection for a site",
        method: "POST",
        path: "/sites/{site_id}/password-protection",
        params: &[
            SITE_ID,
            ParamDef::body_required("enabled", "boolean", "Whether protection is on"),
        ],
        hint: None,
        noun: "protection",
    },
];

pub static ANALYTICS: &[ToolDef] = &[
    ToolDef {
        name: "get_access_logs",
        description: "Get recent access-log entries for a site",
        method: "GET",
        path: "/sites/{site_id}/access-logs",
        params: &[
            SITE_ID,
            ParamDef::query("lines", "integer", "Number of log lines to return"),
        ],
        hint: None,
        noun: "log entry",
    },
    ToolDef {
        name: "list_waf_events",
        description: "List recent web application firewall events for a site",
        method: "GET",
        path: "/sites/{site_id}/reporting/waf-eventlist",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "event",
    },
    ToolDef {
        name: "get_waf_events_by_source",
        description: "Get firewall events grouped by source",
        method: "GET",
        path: "/sites/{site_id}/reporting/waf-events-source",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_waf_events_timeline",
        description: "Get firewall events bucketed over time",
        method: "GET",
        path: "/sites/{site_id}/reporting/waf-events-time",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_request_volume_by_source",
        description: "Get CDN request volume grouped by source",
        method: "GET",
        path: "/sites/{site_id}/reporting/cdn-request-volume-by-source",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_total_requests",
        description: "Get total request counts for a site",
        method: "GET",
        path: "/sites/{site_id}/reporting/total-requests",
        params: &[
            SITE_ID,
            ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d"),
        ],
        hint: None,
        noun: "report",
    },
    ToolDef {
        name: "get_account_visitors",
        description: "Get visitor totals across all sites on the account",
        method: "GET",
        path: "/account/visitors",
        params: &[ParamDef::query("period", "string", "Reporting period, e.g. 24h or 7d")],
        hint: None,
        noun: "report",
    },
];

/// All tool tables in catalog order.
#[must_use]
pub fn groups() -> [(&'static str, &'static [ToolDef]); 8] {
    [
        ("sites", SITES),
        ("backups", BACKUPS),
        ("domains", DOMAINS),
        ("wordpress", WORDPRESS),
        ("performance", PERFORMANCE),
        ("billing", BILLING),
        ("access", ACCESS),
        ("analytics", ANALYTICS),
    ]
}

/// Iterate every tool definition.
pub fn all() -> impl Iterator<Item = &'static ToolDef> {
    groups().into_iter().flat_map(|(_, defs)| defs.iter())
}

/// Look up a tool definition by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ToolDef> {
    all().find(|def| def.name == name)
}

/// Build the MCP `Tool` advertisement for a definition.
#[must_use]
pub fn to_tool(def: &ToolDef) -> Tool {
    let schema = build_input_schema(def.params);
    let schema_obj = schema
        .as_object()
        .cloned()
        .unwrap_or_else(JsonObject::new);
    let mut tool = Tool::new(def.name, def.description, Arc::new(schema_obj));
    tool.annotations = Some(annotations_for_method(def.method));
    tool
}

fn build_input_schema(params: &[ParamDef]) -> Value {
    let mut properties = json!({});
    let mut required: Vec<&str> = Vec::new();

    for param in params {
        properties[param.name] = json!({
            "type": param.kind,
            "description": param.description,
        });
        if param.required {
            required.push(param.name);
        }
    }

    let mut schema = json!({
        "type": "object",
        "properties": properties,
    });
    if !required.is_empty() {
        schema["required"] = json!(required);
    }
    schema
}

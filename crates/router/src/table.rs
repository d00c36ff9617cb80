//! The application's route table.

use crate::route::RouteEntry;

/// Where unauthenticated navigations are sent.
pub const LOGIN_PATH: &str = "/login";

/// Build the route table. Order matters: the first matching entry wins.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new(LOGIN_PATH, "views/Login").named("Login"),
        RouteEntry::new("/register", "views/Register").named("Register"),
        RouteEntry::new("/", "layouts/MainLayout")
            .redirect_to("/home")
            .requires_auth()
            .with_children(vec![
                RouteEntry::new("home", "views/Home").named("Home"),
                RouteEntry::new("modules", "views/modules/ModuleManagement").named("Modules"),
                RouteEntry::new("permissions", "views/permissions/PermissionConfig")
                    .named("Permissions"),
                RouteEntry::new("roles", "views/roles/RoleManagement").named("Roles"),
                RouteEntry::new("options", "views/options/OptionManagement").named("Options"),
                RouteEntry::new("accounts", "views/accounts/AccountManagement").named("Accounts"),
                RouteEntry::new("personnel/archive", "views/personnel/PersonnelArchive")
                    .named("PersonnelArchive"),
                // organization structure
                RouteEntry::new("organization/group-company", "views/organization/GroupCompany")
                    .named("GroupCompany"),
                RouteEntry::new(
                    "organization/functional-center",
                    "views/organization/FunctionalCenter",
                )
                .named("FunctionalCenter"),
                RouteEntry::new("organization/department", "views/organization/Department")
                    .named("Department"),
                RouteEntry::new(
                    "organization/project-department",
                    "views/organization/ProjectDepartment",
                )
                .named("ProjectDepartment"),
                RouteEntry::new("organization/project", "views/organization/Project")
                    .named("Project"),
                // mall
                RouteEntry::new("mall/ad-settings", "views/mall/AdSettings").named("AdSettings"),
                RouteEntry::new("mall/mall-type", "views/mall/MallType").named("MallType"),
                RouteEntry::new("mall/stores", "views/mall/StoreManagement")
                    .named("StoreManagement"),
                RouteEntry::new("mall/products", "views/mall/ProductManagement")
                    .named("ProductManagement"),
                RouteEntry::new("mall/orders", "views/mall/OrderManagement")
                    .named("OrderManagement"),
            ]),
    ]
}

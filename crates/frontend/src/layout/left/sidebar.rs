//! Console navigation: which sections a role can open

use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::routes::console_path;
use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Users,
    Vendors,
    Drivers,
    Rides,
    Pricing,
    Employees,
}

impl Section {
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Vendors => "vendors",
            Section::Drivers => "drivers",
            Section::Rides => "rides",
            Section::Pricing => "pricing",
            Section::Employees => "employees",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Vendors => "Vendors",
            Section::Drivers => "Drivers",
            Section::Rides => "Rides",
            Section::Pricing => "Pricing",
            Section::Employees => "Employees",
        }
    }

    pub fn icon(&self) -> &'static str {
        self.slug()
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "dashboard" => Some(Section::Dashboard),
            "users" => Some(Section::Users),
            "vendors" => Some(Section::Vendors),
            "drivers" => Some(Section::Drivers),
            "rides" => Some(Section::Rides),
            "pricing" => Some(Section::Pricing),
            "employees" => Some(Section::Employees),
            _ => None,
        }
    }
}

pub fn menu_for(role: Role) -> &'static [Section] {
    match role {
        Role::Admin => &[
            Section::Dashboard,
            Section::Users,
            Section::Vendors,
            Section::Drivers,
            Section::Rides,
            Section::Pricing,
        ],
        Role::Vendor => &[Section::Dashboard, Section::Drivers, Section::Rides],
        Role::Partner => &[Section::Dashboard, Section::Rides],
        Role::Agent => &[Section::Dashboard, Section::Rides],
        Role::Corporate => &[Section::Dashboard, Section::Employees, Section::Rides],
    }
}

/// Resolves a URL segment for a role. An empty segment is the dashboard;
/// sections outside the role's menu resolve to nothing.
pub fn section_for(role: Role, slug: &str) -> Option<Section> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Some(Section::Dashboard);
    }
    Section::from_slug(slug).filter(|s| menu_for(role).contains(s))
}

#[component]
pub fn Sidebar(role: Role, #[prop(into)] active: Signal<Option<Section>>) -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {menu_for(role)
                .iter()
                .map(|&section| {
                    view! {
                        <a
                            href=console_path(role, section.slug())
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || active.get() == Some(section)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(section.icon())}
                                <span>{section.label()}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_starts_with_dashboard() {
        for role in Role::ALL {
            assert_eq!(menu_for(role).first(), Some(&Section::Dashboard));
            assert!(menu_for(role).contains(&Section::Rides));
        }
    }

    #[test]
    fn test_section_for_respects_role() {
        assert_eq!(section_for(Role::Admin, "pricing"), Some(Section::Pricing));
        assert_eq!(section_for(Role::Vendor, "pricing"), None);
        assert_eq!(section_for(Role::Corporate, "employees"), Some(Section::Employees));
        assert_eq!(section_for(Role::Partner, ""), Some(Section::Dashboard));
        assert_eq!(section_for(Role::Agent, "nope"), None);
    }

    #[test]
    fn test_slug_roundtrip() {
        for role in Role::ALL {
            for section in menu_for(role) {
                assert_eq!(Section::from_slug(section.slug()), Some(*section));
            }
        }
    }
}

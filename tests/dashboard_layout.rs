use dashboard_shell::components::layout::{ContentArea, DashboardLayout, Sidebar, LAYOUT_CLASS};
use dashboard_shell::config::SidebarConfig;
use dashboard_shell::pages::Settings;
use dioxus::prelude::*;

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

fn wrapper_open() -> String {
    format!("<div class=\"{}\">", LAYOUT_CLASS)
}

fn sidebar_html() -> String {
    render(rsx! { Sidebar {} })
}

#[test]
fn test_text_children_follow_sidebar() {
    let html = render(rsx! {
        DashboardLayout { "Hello" }
    });

    assert_eq!(html, format!("{}{}Hello</div>", wrapper_open(), sidebar_html()));
}

#[test]
fn test_empty_children_leave_only_sidebar() {
    let html = render(rsx! {
        DashboardLayout {}
    });

    assert_eq!(html, format!("{}{}</div>", wrapper_open(), sidebar_html()));
}

#[test]
fn test_element_children_are_not_wrapped() {
    let html = render(rsx! {
        DashboardLayout {
            section { class: "page",
                h1 { "Reports" }
            }
        }
    });

    assert!(html.starts_with(&wrapper_open()));
    assert!(html.ends_with("</aside><section class=\"page\"><h1>Reports</h1></section></div>"));
}

#[test]
fn test_sidebar_comes_first() {
    let html = render(rsx! {
        DashboardLayout {
            ContentArea { title: "Overview", p { "body" } }
        }
    });

    let sidebar = html.find("<aside").unwrap();
    let content = html.find("<main class=\"content-area\">").unwrap();
    assert_eq!(sidebar, wrapper_open().len());
    assert!(sidebar < content);
}

#[test]
fn test_single_wrapper_per_render() {
    let html = render(rsx! {
        DashboardLayout {
            ContentArea { title: "Activity", "nothing yet" }
        }
    });

    assert_eq!(html.matches("class=\"dashboard-layout").count(), 1);
    assert_eq!(html.matches("<aside").count(), 1);
}

#[test]
fn test_changing_children_only_changes_content_region() {
    let first = render(rsx! {
        DashboardLayout { "first page" }
    });
    let second = render(rsx! {
        DashboardLayout {
            ContentArea { title: "Second", "second page" }
        }
    });

    let sidebar_end = |html: &str| html.find("</aside>").unwrap() + "</aside>".len();
    assert_eq!(first[..sidebar_end(&first)], second[..sidebar_end(&second)]);
    assert_ne!(first[sidebar_end(&first)..], second[sidebar_end(&second)..]);
}

#[test]
fn test_sidebar_starts_expanded_with_every_link() {
    let html = sidebar_html();
    let config = SidebarConfig::load();

    assert!(html.starts_with("<aside class=\"sidebar\">"));
    assert!(!html.contains("sidebar-collapsed"));
    assert!(html.contains(&config.brand));
    for section in &config.sections {
        assert!(html.contains(&section.title));
    }
    for item in config.items() {
        let anchor = format!("<a class=\"nav-link\" href=\"{}\">{}</a>", item.href, item.label);
        assert!(html.contains(&anchor), "missing {anchor} in {html}");
    }
}

#[test]
fn test_sidebar_links_keep_config_order() {
    let html = sidebar_html();
    let positions: Vec<usize> = SidebarConfig::load()
        .items()
        .map(|item| html.find(&format!("href=\"{}\"", item.href)).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_settings_page_lists_navigation() {
    let html = render(rsx! {
        DashboardLayout {
            Settings {}
        }
    });

    assert!(html.contains("<h2>Settings</h2>"));
    for item in SidebarConfig::load().items() {
        assert!(html.contains(&format!("<code>{}</code>", item.href)));
    }
}

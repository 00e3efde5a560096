use academy_core::{OpenSections, Section};
use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::{SidebarGroupVm, map_sidebar_groups};

/// Collapsible per-section lesson list.
///
/// The open set is seeded from the launch route (or, without one, the path
/// the sidebar first renders at) and then only changes through the toggle
/// buttons.
#[component]
pub fn Sidebar(current_path: String) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let initial_path = ctx
        .launch_path()
        .map_or_else(|| current_path.clone(), str::to_string);
    let mut open = use_signal(move || OpenSections::for_path(&initial_path));

    let toggle = use_callback(move |section: Section| {
        let now_open = open.write().toggle(section);
        debug!(%section, now_open, "sidebar section toggled");
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<SidebarTestHandles>() {
            handles.register(toggle);
        }
    });

    let groups = map_sidebar_groups(&curriculum, &open.read(), &current_path);

    rsx! {
        aside { class: "sidebar",
            for group in groups {
                SidebarGroup {
                    key: "{group.section}",
                    group,
                    on_toggle: toggle,
                }
            }
        }
    }
}

#[component]
fn SidebarGroup(group: SidebarGroupVm, on_toggle: EventHandler<Section>) -> Element {
    let section = group.section;

    rsx! {
        div { class: group.class(),
            div { class: "sidebar-group-header",
                Link { class: "sidebar-group-title", to: group.path.clone(), "{group.title}" }
                button {
                    class: "sidebar-toggle",
                    r#type: "button",
                    aria_expanded: "{group.is_open}",
                    aria_label: "Toggle {group.title}",
                    onclick: move |_| on_toggle.call(section),
                    "{group.toggle_glyph()}"
                }
            }
            if group.is_open {
                ul { class: "sidebar-lessons",
                    for lesson in group.lessons.iter() {
                        li {
                            key: "{lesson.path}",
                            class: if lesson.is_current { "sidebar-lesson current" } else { "sidebar-lesson" },
                            Link { to: lesson.path.clone(), "{lesson.title}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SidebarTestHandles {
    toggle: std::rc::Rc<std::cell::RefCell<Option<Callback<Section>>>>,
}

#[cfg(test)]
impl SidebarTestHandles {
    pub(crate) fn register(&self, toggle: Callback<Section>) {
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn toggle(&self) -> Callback<Section> {
        (*self.toggle.borrow()).expect("sidebar toggle registered")
    }
}

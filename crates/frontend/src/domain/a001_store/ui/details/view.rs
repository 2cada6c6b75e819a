use super::view_model::StoreDetailsViewModel;
use contracts::domain::a001_store::store_hours::hour_options;
use contracts::domain::a001_store::Weekday;
use contracts::system::auth::StoreSession;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::config::AppConfig;

/// Entries of a time select: the empty `--` entry, then every hour,
/// each with whether it is the current value
fn time_choices(current: &str) -> Vec<(String, bool)> {
    std::iter::once(String::new())
        .chain(hour_options())
        .map(|value| {
            let selected = value == current;
            (value, selected)
        })
        .collect()
}

fn time_select<F>(current: String, disabled: bool, on_change: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <select
            class="time-select"
            disabled=disabled
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {time_choices(&current)
                .into_iter()
                .map(|(value, selected)| {
                    let label = if value.is_empty() { "--".to_string() } else { value.clone() };
                    view! { <option value=value selected=selected>{label}</option> }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn HoursRow(vm: StoreDetailsViewModel, day: Weekday) -> impl IntoView {
    let row = move || vm.hours.with(|h| h.day(day).clone());

    view! {
        <div class="hours-grid">
            <div class="hours-day">{format!("{}:", day.name())}</div>

            <div>
                {move || {
                    let r = row();
                    if vm.editing.get() {
                        time_select(r.open, r.closed, move |t| vm.set_open(day, t)).into_any()
                    } else {
                        let text = if r.closed {
                            "Closed".to_string()
                        } else if r.open.is_empty() {
                            "—".to_string()
                        } else {
                            r.open
                        };
                        view! { <span class="readonly">{text}</span> }.into_any()
                    }
                }}
            </div>

            <div>
                {move || {
                    let r = row();
                    if vm.editing.get() {
                        time_select(r.close, r.closed, move |t| vm.set_close(day, t)).into_any()
                    } else {
                        let text = if r.closed {
                            String::new()
                        } else if r.close.is_empty() {
                            "—".to_string()
                        } else {
                            r.close
                        };
                        view! { <span class="readonly">{text}</span> }.into_any()
                    }
                }}
            </div>

            <div class="closed-cell">
                {move || {
                    let r = row();
                    if vm.editing.get() {
                        view! {
                            <label class="closed-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=r.closed
                                    on:change=move |ev| vm.set_closed(day, event_target_checked(&ev))
                                />
                                <span>"Closed"</span>
                            </label>
                        }
                        .into_any()
                    } else {
                        let class = if r.closed { "readonly closed" } else { "readonly" };
                        view! {
                            <span class=class>{if r.closed { "Closed" } else { "" }}</span>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn LocationField(vm: StoreDetailsViewModel) -> impl IntoView {
    move || {
        if vm.editing.get() {
            view! {
                <div class="location-grid">
                    <input
                        type="text"
                        placeholder="City"
                        prop:value=move || vm.address.get().city
                        on:input=move |ev| vm.address.update(|a| a.city = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Street and number (e.g., Aza 25)"
                        prop:value=move || vm.address.get().street
                        on:input=move |ev| vm.address.update(|a| a.street = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Apt"
                        prop:value=move || vm.address.get().apt
                        on:input=move |ev| vm.address.update(|a| a.apt = event_target_value(&ev))
                    />
                </div>
            }
            .into_any()
        } else {
            let location = vm
                .store
                .with(|s| s.as_ref().map(|s| s.location.clone()))
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "-".to_string());
            view! { <span>{location}</span> }.into_any()
        }
    }
}

/// Store profile: identity, location and weekly opening hours
#[component]
pub fn StoreDetails(session: StoreSession) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = StoreDetailsViewModel::new();
    vm.load(config.clone(), &session);

    let store_id = session.store_id().to_string();
    let field = move |f: fn(&contracts::domain::a001_store::StoreInfo) -> &String| {
        vm.store
            .with(|s| s.as_ref().map(|s| f(s).clone()))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

        <Show
            when=move || vm.store.with(Option::is_some)
            fallback=|| view! { <div class="loading">"Loading…"</div> }
        >
            <div class="homepage">
                <h2 class="title">"Store Info"</h2>

                <div class="field">
                    <label>"ID"</label>
                    <span>
                        {
                            let store_id = store_id.clone();
                            move || {
                                vm.store
                                    .with(|s| s.as_ref().map(|s| s.store_id.clone()))
                                    .filter(|id| !id.is_empty())
                                    .unwrap_or_else(|| store_id.clone())
                            }
                        }
                    </span>
                </div>
                <div class="field">
                    <label>"Email"</label>
                    <span>{move || field(|s| &s.email)}</span>
                </div>
                <div class="field">
                    <label>"Name"</label>
                    <span>{move || field(|s| &s.name)}</span>
                </div>

                <div class="field">
                    <label>"Location"</label>
                    <LocationField vm=vm />
                </div>

                <div class="hours-card">
                    <div class="hours-title">"Opening Hours"</div>

                    <div class="hours-grid hours-head">
                        <div>"Day"</div>
                        <div>"Open"</div>
                        <div>"To"</div>
                        <div>"Closed"</div>
                    </div>

                    {Weekday::ALL
                        .into_iter()
                        .map(|day| view! { <HoursRow vm=vm day=day /> })
                        .collect_view()}

                    <Show when=move || !vm.editing.get()>
                        <div class="hours-note">
                            "To edit, click “Edit” below. Changes will be saved in your store profile."
                        </div>
                    </Show>
                </div>

                <div class="actions">
                    {
                        let config = config.clone();
                        let session = session.clone();
                        move || {
                            if vm.editing.get() {
                                let config = config.clone();
                                let session = session.clone();
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| vm.cancel_edit()
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        disabled=vm.saving
                                        on_click=move |_| vm.save_command(config.clone(), &session)
                                    >
                                        {move || if vm.saving.get() { "Saving…" } else { "Save" }}
                                    </Button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| vm.start_edit()
                                    >
                                        "Edit"
                                    </Button>
                                }
                                .into_any()
                            }
                        }
                    }
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_choices_mark_current() {
        let choices = time_choices("08:00");
        assert_eq!(choices.len(), 19);
        assert_eq!(choices[0], (String::new(), false));
        let selected: Vec<&str> = choices
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(value, _)| value.as_str())
            .collect();
        assert_eq!(selected, vec!["08:00"]);
    }

    #[test]
    fn test_time_choices_empty_selects_placeholder() {
        let choices = time_choices("");
        assert!(choices[0].1);
        assert_eq!(choices.iter().filter(|(_, selected)| *selected).count(), 1);
        assert_eq!(choices.last().map(|(v, _)| v.as_str()), Some("23:00"));
    }
}

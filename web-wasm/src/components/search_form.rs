//! 検索フォームコンポーネント
//!
//! 職種セレクト・地域入力（郡サジェスト付き）・検索ボタン

use jagedo_match_common::{CountyList, InputEvent, JOB_TYPES};
use leptos::prelude::*;
use web_sys::{Event, SubmitEvent};

#[component]
pub fn SearchForm<F>(
    counties: ReadSignal<CountyList>,
    job_type: ReadSignal<String>,
    set_job_type: WriteSignal<String>,
    location: ReadSignal<String>,
    set_location: WriteSignal<String>,
    on_event: F,
) -> impl IntoView
where
    F: Fn(InputEvent, Event) + 'static + Clone + Send,
{
    view! {
        <form
            id="filterForm"
            class="filter-form"
            on:submit={
                let on_event = on_event.clone();
                move |ev: SubmitEvent| on_event(InputEvent::Submit, ev.into())
            }
        >
            <div class="form-group">
                <label for="jobType">"Job type"</label>
                <select
                    id="jobType"
                    on:change={
                        let on_event = on_event.clone();
                        move |ev: Event| {
                            set_job_type.set(event_target_value(&ev));
                            on_event(InputEvent::JobTypeChanged, ev);
                        }
                    }
                >
                    <option value="" selected=move || job_type.get().is_empty()>
                        "Select a job type"
                    </option>
                    {JOB_TYPES
                        .iter()
                        .map(|&(value, label)| {
                            view! {
                                <option value=value selected=move || job_type.get() == value>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="location">"Location"</label>
                <input
                    type="text"
                    id="location"
                    list="locationSuggestions"
                    placeholder="Start typing a county..."
                    autocomplete="off"
                    prop:value=move || location.get()
                    on:input={
                        let on_event = on_event.clone();
                        move |ev: Event| {
                            set_location.set(event_target_value(&ev));
                            on_event(InputEvent::LocationInput, ev);
                        }
                    }
                />
                <datalist id="locationSuggestions">
                    <For
                        each=move || counties.get().0.into_iter().enumerate()
                        key=|(i, county)| (*i, county.clone())
                        children=|(_, county)| view! { <option value=county /> }
                    />
                </datalist>
            </div>

            <button type="submit" class="btn btn-primary">"Find professionals"</button>
        </form>
    }
}

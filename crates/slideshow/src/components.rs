//! Leptos slideshow view: navigation wiring, input listeners, and the per-variant renderers.

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    input::{request_for_key, SwipeTracker},
    model::{Column, MediaRef, MediaSide, Section, Slide, TimelineDate, TimelineEntry, TocEntry},
    navigation::{fade_out_delay, settle_delay, NavOutcome, NavRequest, SlideNavigator},
    timeline::{
        axis_ticks, format_range, layout_timeline, orientation_for_width, TickKind,
        TimelineOrientation, VERTICAL_LAYOUT_MAX_WIDTH_PX,
    },
};

/// Width reserved for entry labels beside the horizontal timeline track.
const TIMELINE_LABEL_COLUMN_PX: f64 = 160.0;

/// Current calendar month, used as the end of ongoing timeline entries.
pub fn current_year_month() -> TimelineDate {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        return TimelineDate::year_month(date.get_full_year() as i32, (date.get_month() + 1) as u8);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        TimelineDate::year_month(1970, 1)
    }
}

/// Form controls keep their own arrow-key behavior.
fn is_form_control_tag(tag: &str) -> bool {
    matches!(tag, "INPUT" | "TEXTAREA" | "SELECT")
}

/// Arrow keys drive the deck only when focus is inside it or nowhere in particular, so a deck
/// embedded in a background window ignores keys meant for the active one.
#[cfg(target_arch = "wasm32")]
fn key_belongs_to_slideshow(ev: &web_sys::KeyboardEvent, root: &web_sys::Node) -> bool {
    let from_form_control = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| is_form_control_tag(&element.tag_name()));
    if from_form_control {
        return false;
    }
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    match active {
        None => true,
        Some(active) => {
            let active_node: &web_sys::Node = &active;
            active.tag_name() == "BODY" || root.contains(Some(active_node))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn key_belongs_to_slideshow(_: &web_sys::KeyboardEvent, _: &web_sys::Node) -> bool {
    true
}

/// Runs the two timed phases of a started transition. If the slideshow unmounts first, the
/// signal is gone and the callbacks do nothing.
fn schedule_transition(navigator: RwSignal<SlideNavigator>) {
    set_timeout(
        move || {
            if navigator.try_update(|nav| nav.complete_fade_out()) == Some(true) {
                set_timeout(
                    move || {
                        let _ = navigator.try_update(|nav| nav.complete_settle());
                    },
                    settle_delay(),
                );
            }
        },
        fade_out_delay(),
    );
}

/// Applies navigation requests to `navigator`, calling `on_started` for each transition that
/// begins. Requests made mid-transition are dropped.
fn navigation_handler(
    navigator: RwSignal<SlideNavigator>,
    on_started: impl Fn() + Copy + 'static,
) -> impl Fn(NavRequest) + Copy + 'static {
    move |request: NavRequest| {
        let outcome = navigator
            .try_update(|nav| nav.request(request))
            .unwrap_or(NavOutcome::Busy);
        match outcome {
            NavOutcome::Started { .. } => on_started(),
            NavOutcome::Busy => {
                logging::debug_warn!("slide navigation dropped mid-transition: {request:?}")
            }
            NavOutcome::Unchanged | NavOutcome::OutOfRange => {}
        }
    }
}

/// Builds the jump callback and hands it to the embedding view when one asked for it.
fn register_jump(
    navigate: impl Fn(NavRequest) + Copy + 'static,
    register: Option<Callback<Callback<usize>>>,
) -> Callback<usize> {
    let go_to = Callback::new(move |index: usize| navigate(NavRequest::GoTo(index)));
    if let Some(register) = register {
        register.call(go_to);
    }
    go_to
}

#[derive(Clone, Copy)]
struct SlideRenderContext {
    go_to: Callback<usize>,
    inject: Option<Callback<String, View>>,
    now: TimelineDate,
}

#[component]
/// Paged slide viewer with keyboard, swipe, and button navigation.
pub fn Slideshow(
    /// Ordered deck. Table-of-contents targets index into this list.
    slides: Vec<Slide>,
    /// Deck title shown above the stage.
    #[prop(optional, into)]
    title: Option<String>,
    /// Renders the component named by a `Slide::Blank`.
    #[prop(optional)]
    inject: Option<Callback<String, View>>,
    /// Receives a jump callback so the embedding view can navigate the deck.
    #[prop(optional)]
    on_register_navigate: Option<Callback<Callback<usize>>>,
    /// Overrides the "now" used for ongoing timeline entries.
    #[prop(optional)]
    now: Option<TimelineDate>,
) -> impl IntoView {
    let len = slides.len();
    let slides = store_value(slides);
    let navigator = create_rw_signal(SlideNavigator::new(len));
    let swipe = store_value(SwipeTracker::default());

    let navigate = navigation_handler(navigator, move || schedule_transition(navigator));
    let go_to = register_jump(navigate, on_register_navigate);
    let root = create_node_ref::<html::Section>();

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let Some(root) = root.get_untracked() else {
            return;
        };
        if !key_belongs_to_slideshow(&ev, &root) {
            return;
        }
        if let Some(request) = request_for_key(&ev.key()) {
            ev.prevent_default();
            navigate(request);
        }
    });
    on_cleanup(move || key_listener.remove());

    let on_touchstart = move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.changed_touches().get(0) {
            swipe.update_value(|tracker| {
                tracker.begin(f64::from(touch.client_x()), f64::from(touch.client_y()))
            });
        }
    };
    let on_touchend = move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.changed_touches().get(0) else {
            swipe.update_value(SwipeTracker::cancel);
            return;
        };
        let mut request = None;
        swipe.update_value(|tracker| {
            request = tracker.end(f64::from(touch.client_x()), f64::from(touch.client_y()))
        });
        if let Some(request) = request {
            navigate(request);
        }
    };

    let context = SlideRenderContext {
        go_to,
        inject,
        now: now.unwrap_or_else(current_year_month),
    };
    let current_index = move || navigator.with(SlideNavigator::current_index);
    let current_kind = move || {
        let index = current_index();
        slides.with_value(|deck| deck.get(index).map(Slide::kind).unwrap_or("empty"))
    };

    view! {
        <section
            node_ref=root
            class="slideshow"
            data-ui-kind="slideshow"
            on:touchstart=on_touchstart
            on:touchend=on_touchend
            on:touchcancel=move |_| swipe.update_value(SwipeTracker::cancel)
        >
            {title.map(|title| view! { <header class="slideshow-title">{title}</header> })}
            <div
                class="slideshow-stage"
                class:fading=move || navigator.with(SlideNavigator::is_fading_out)
                data-slide-kind=current_kind
            >
                {move || {
                    let index = current_index();
                    slides
                        .with_value(|deck| deck.get(index).cloned())
                        .map(|slide| render_slide(slide, context))
                }}
            </div>
            <nav class="slideshow-controls" aria-label="Slide navigation">
                <button
                    type="button"
                    aria-label="Previous slide"
                    disabled=move || !navigator.with(SlideNavigator::has_prev)
                    on:click=move |_| navigate(NavRequest::Prev)
                >
                    "\u{2039}"
                </button>
                <span class="slideshow-counter">
                    {move || format!("{} / {}", (current_index() + 1).min(len), len)}
                </span>
                <button
                    type="button"
                    aria-label="Next slide"
                    disabled=move || !navigator.with(SlideNavigator::has_next)
                    on:click=move |_| navigate(NavRequest::Next)
                >
                    "\u{203a}"
                </button>
            </nav>
        </section>
    }
}

fn render_slide(slide: Slide, context: SlideRenderContext) -> View {
    match slide {
        Slide::Intro {
            title,
            subtitle,
            hero,
            tags,
        } => render_intro(title, subtitle, hero, tags),
        Slide::Image {
            title,
            image,
            caption,
        } => render_image(title, image, caption),
        Slide::Columns { title, columns } => render_columns(title, columns),
        Slide::Split {
            title,
            body,
            media,
            media_side,
        } => render_split(title, body, media, media_side),
        Slide::Timeline { title, entries } => {
            view! { <TimelineSlide title entries now=context.now /> }.into_view()
        }
        Slide::Title { title, kicker } => render_title(title, kicker),
        Slide::TableOfContents { title, entries } => {
            render_table_of_contents(title, entries, context.go_to)
        }
        Slide::Quote { quote, attribution } => render_quote(quote, attribution),
        Slide::DualVideo { title, left, right } => render_dual_video(title, left, right),
        Slide::SectionsSplit {
            title,
            sections,
            media,
        } => render_sections_split(title, sections, media),
        Slide::Blank { component } => render_blank(component, context.inject),
    }
}

fn media_image(media: MediaRef) -> View {
    view! { <img class="slide-media" src=media.src alt=media.alt loading="lazy" /> }.into_view()
}

fn media_video(media: MediaRef) -> View {
    view! {
        <video
            class="slide-media"
            src=media.src
            aria-label=media.alt
            autoplay=true
            muted=true
            loop=true
            playsinline=true
        />
    }
    .into_view()
}

fn render_intro(
    title: String,
    subtitle: Option<String>,
    hero: Option<MediaRef>,
    tags: Vec<String>,
) -> View {
    view! {
        <div class="slide slide-intro">
            {hero.map(media_image)}
            <h1>{title}</h1>
            {subtitle.map(|subtitle| view! { <p class="slide-subtitle">{subtitle}</p> })}
            <ul class="slide-tags">
                {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

fn render_image(title: Option<String>, image: MediaRef, caption: Option<String>) -> View {
    view! {
        <figure class="slide slide-image">
            {title.map(|title| view! { <h2>{title}</h2> })}
            {media_image(image)}
            {caption.map(|caption| view! { <figcaption>{caption}</figcaption> })}
        </figure>
    }
    .into_view()
}

fn render_columns(title: String, columns: Vec<Column>) -> View {
    view! {
        <div class="slide slide-columns">
            <h2>{title}</h2>
            <div class="slide-column-grid" style=format!("--column-count:{};", columns.len().max(1))>
                {columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div class="slide-column">
                                <h3>{column.heading}</h3>
                                <ul>
                                    {column
                                        .bullets
                                        .into_iter()
                                        .map(|bullet| view! { <li>{bullet}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

fn render_split(title: String, body: Vec<String>, media: MediaRef, side: MediaSide) -> View {
    let side = match side {
        MediaSide::Left => "left",
        MediaSide::Right => "right",
    };
    view! {
        <div class="slide slide-split" data-media-side=side>
            <div class="slide-split-text">
                <h2>{title}</h2>
                {body.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
            </div>
            <div class="slide-split-media">{media_image(media)}</div>
        </div>
    }
    .into_view()
}

fn render_title(title: String, kicker: Option<String>) -> View {
    view! {
        <div class="slide slide-title">
            {kicker.map(|kicker| view! { <p class="slide-kicker">{kicker}</p> })}
            <h1>{title}</h1>
        </div>
    }
    .into_view()
}

fn render_table_of_contents(title: String, entries: Vec<TocEntry>, go_to: Callback<usize>) -> View {
    view! {
        <div class="slide slide-toc">
            <h2>{title}</h2>
            <ol>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let target = entry.target;
                        view! {
                            <li>
                                <button type="button" on:click=move |_| go_to.call(target)>
                                    {entry.label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
    .into_view()
}

fn render_quote(quote: String, attribution: Option<String>) -> View {
    view! {
        <blockquote class="slide slide-quote">
            <p>{quote}</p>
            {attribution.map(|who| view! { <cite>{who}</cite> })}
        </blockquote>
    }
    .into_view()
}

fn render_dual_video(title: Option<String>, left: MediaRef, right: MediaRef) -> View {
    view! {
        <div class="slide slide-dual-video">
            {title.map(|title| view! { <h2>{title}</h2> })}
            <div class="slide-dual-video-pair">
                {media_video(left)}
                {media_video(right)}
            </div>
        </div>
    }
    .into_view()
}

fn render_sections_split(title: String, sections: Vec<Section>, media: Option<MediaRef>) -> View {
    view! {
        <div class="slide slide-sections-split">
            <div class="slide-sections">
                <h2>{title}</h2>
                {sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <section>
                                <h3>{section.heading}</h3>
                                <p>{section.body}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
            {media.map(|media| view! { <div class="slide-split-media">{media_image(media)}</div> })}
        </div>
    }
    .into_view()
}

fn render_blank(component: String, inject: Option<Callback<String, View>>) -> View {
    let contents = match inject {
        Some(inject) => inject.call(component.clone()),
        None => {
            logging::warn!("blank slide requests `{component}` but no component host is attached");
            ().into_view()
        }
    };
    view! {
        <div class="slide slide-blank" data-component=component>
            {contents}
        </div>
    }
    .into_view()
}

#[component]
fn TimelineSlide(title: String, entries: Vec<TimelineEntry>, now: TimelineDate) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let width = create_rw_signal(VERTICAL_LAYOUT_MAX_WIDTH_PX);
    let measure = move || {
        if let Some(element) = container.get_untracked() {
            width.set(f64::from(element.client_width()));
        }
    };
    container.on_load(move |_| request_animation_frame(measure));
    let resize_listener = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize_listener.remove());

    let layout = store_value(layout_timeline(&entries, now));
    let entries = store_value(entries);

    let horizontal = move || {
        let Some(layout) = layout.get_value() else {
            return ().into_view();
        };
        let track_width = (width.get() - TIMELINE_LABEL_COLUMN_PX).max(0.0);
        let ticks = axis_ticks(layout.axis, track_width);
        view! {
            <div class="timeline" data-orientation="horizontal">
                <div class="timeline-axis">
                    {ticks
                        .into_iter()
                        .map(|tick| {
                            let kind = match tick.kind {
                                TickKind::Year => "year",
                                TickKind::Month => "month",
                                TickKind::MonthDot => "dot",
                            };
                            view! {
                                <span
                                    class="timeline-tick"
                                    data-tick-kind=kind
                                    style=format!("left:{:.3}%;", tick.offset_pct)
                                >
                                    {tick.label}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {layout
                    .bars
                    .into_iter()
                    .map(|bar| {
                        let entry = entries.with_value(|all| all[bar.entry_index].clone());
                        let range = format_range(&entry);
                        view! {
                            <div class="timeline-row">
                                <div class="timeline-label">
                                    <strong>{entry.label}</strong>
                                    {entry.sub_label.map(|sub| view! { <span>{sub}</span> })}
                                </div>
                                <div class="timeline-track">
                                    <div
                                        class="timeline-bar"
                                        class:ongoing=bar.span.ongoing
                                        title=range
                                        style=format!(
                                            "left:{:.3}%;width:{:.3}%;",
                                            bar.offset_pct,
                                            bar.width_pct
                                        )
                                    >
                                        {bar
                                            .span
                                            .ongoing
                                            .then(|| view! { <span class="timeline-now-marker" aria-label="ongoing" /> })}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view()
    };

    let vertical = move || {
        view! {
            <ol class="timeline" data-orientation="vertical">
                {entries
                    .get_value()
                    .into_iter()
                    .map(|entry| {
                        let range = format_range(&entry);
                        let ongoing = entry.end.is_none();
                        view! {
                            <li class="timeline-item" class:ongoing=ongoing>
                                <strong>{entry.label}</strong>
                                {entry.sub_label.map(|sub| view! { <span>{sub}</span> })}
                                <time>{range}</time>
                                <ul>
                                    {entry
                                        .details
                                        .into_iter()
                                        .map(|line| view! { <li>{line}</li> })
                                        .collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_view()
    };

    view! {
        <div class="slide slide-timeline" node_ref=container>
            <h2>{title}</h2>
            {move || match orientation_for_width(width.get()) {
                TimelineOrientation::Horizontal => horizontal(),
                TimelineOrientation::Vertical => vertical(),
            }}
        </div>
    }
}

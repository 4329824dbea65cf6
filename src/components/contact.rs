use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::{stagger, transition_delay};
use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{ContactDetail, CONTACT_DETAILS, PHONE_DISPLAY, PHONE_HREF, SERVICE_INTERESTS};
use crate::form::{ContactState, Field, FormAction, SubmitPhase};
use crate::hooks::use_reveal;

const CONTACT_CSS: &str = r#"
    .contact-section {
        padding: 5rem 0;
        background: linear-gradient(135deg, #1e3a8a, #581c87);
        position: relative;
        overflow: hidden;
    }
    .contact-section .section-header h2 {
        color: #fff;
    }
    .contact-section .section-header p {
        color: #dbeafe;
    }
    .contact-section .section-divider {
        background: #93c5fd;
    }
    .dot-grid {
        position: absolute;
        inset: 0;
        opacity: 0.1;
        background-image: radial-gradient(circle, white 1px, transparent 1px);
        background-size: 50px 50px;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 2fr;
        gap: 2rem;
    }
    .contact-info h3,
    .contact-panel h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        margin-bottom: 2rem;
    }
    .info-card {
        display: flex;
        align-items: flex-start;
        padding: 1.5rem;
        margin-bottom: 1.5rem;
        background: rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        backdrop-filter: blur(4px);
        cursor: pointer;
        transition: all 0.7s ease;
        transform: translateX(2rem);
        opacity: 0;
    }
    .contact-section.visible .info-card {
        transform: none;
        opacity: 1;
    }
    .contact-section.visible .info-card.hovered {
        transform: scale(1.05);
        background: rgba(255, 255, 255, 0.2);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
    }
    .info-card .icon {
        width: 1.5rem;
        height: 1.5rem;
        color: #93c5fd;
        margin: 0.25rem 1rem 0 0;
        transition: transform 0.3s ease;
    }
    .info-card.hovered .icon {
        transform: scale(1.1) rotate(6deg);
    }
    .info-card h4 {
        font-weight: 600;
        color: #fff;
        margin-bottom: 0.5rem;
        transition: color 0.3s ease;
    }
    .info-card.hovered h4 {
        color: #bfdbfe;
    }
    .info-card p {
        color: #dbeafe;
    }
    .contact-panel {
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        border-radius: 1rem;
        padding: 2rem;
        transition: all 1s ease 0.6s;
        transform: translateY(2rem);
        opacity: 0;
    }
    .contact-section.visible .contact-panel {
        transform: none;
        opacity: 1;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .floating-field {
        position: relative;
        margin-bottom: 1.5rem;
    }
    .form-row .floating-field {
        margin-bottom: 0;
    }
    .floating-field label {
        position: absolute;
        left: 1rem;
        top: 1rem;
        color: #6b7280;
        pointer-events: none;
        transition: all 0.3s ease;
    }
    .floating-field.raised label {
        top: 0.5rem;
        font-size: 0.75rem;
        color: #2563eb;
        font-weight: 500;
    }
    .floating-field input,
    .floating-field select,
    .floating-field textarea {
        width: 100%;
        padding: 1.5rem 1rem 0.75rem;
        border: 2px solid #e5e7eb;
        border-radius: 0.5rem;
        background: #fff;
        outline: none;
        resize: none;
        transition: all 0.3s ease;
    }
    .floating-field.focused input,
    .floating-field.focused select,
    .floating-field.focused textarea {
        border-color: #3b82f6;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transform: scale(1.05);
    }
    .field-underline {
        position: absolute;
        bottom: 0;
        left: 0;
        height: 2px;
        width: 0;
        background: #3b82f6;
        transition: width 0.3s ease;
    }
    .floating-field.focused .field-underline {
        width: 100%;
    }
    .submit-button {
        width: 100%;
        padding: 1rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        font-size: 1.125rem;
        font-weight: 600;
        color: #fff;
        background: #2563eb;
        cursor: pointer;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        transition: all 0.5s ease;
    }
    .submit-button.idle:hover {
        background: #1d4ed8;
        transform: translateY(-0.25rem) scale(1.05);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
    }
    .submit-button.submitting {
        background: linear-gradient(90deg, #60a5fa, #9333ea);
        cursor: not-allowed;
    }
    .submit-button.submitted {
        background: #22c55e;
        transform: scale(1.05);
    }
    .submit-button .icon {
        width: 1.25rem;
        height: 1.25rem;
    }
    .submit-button.submitted .icon {
        animation: bounce 1s infinite;
    }
    .spinner {
        width: 1.5rem;
        height: 1.5rem;
        border: 2px solid #fff;
        border-top-color: transparent;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: none; }
    }
    .call-cta {
        text-align: center;
        margin-top: 4rem;
        transition: all 1s ease 1s;
        transform: translateY(2rem);
        opacity: 0;
    }
    .contact-section.visible .call-cta {
        transform: none;
        opacity: 1;
    }
    .call-cta p {
        color: #dbeafe;
        font-size: 1.125rem;
        margin-bottom: 1rem;
    }
    .call-cta a {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
        color: #fff;
        font-weight: 600;
        transition: all 0.3s ease;
    }
    .call-cta a:hover {
        background: rgba(255, 255, 255, 0.3);
        transform: scale(1.05);
    }
    .call-cta .icon {
        width: 1.25rem;
        height: 1.25rem;
    }
    @media (max-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 768px) {
        .form-row {
            grid-template-columns: 1fr;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct InfoCardProps {
    detail: ContactDetail,
    delay: u32,
}

#[function_component(InfoCard)]
fn info_card(props: &InfoCardProps) -> Html {
    let detail = props.detail;
    let is_hovered = use_state(|| false);
    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <div
            class={classes!("info-card", (*is_hovered).then(|| "hovered"))}
            style={transition_delay(props.delay)}
            {onmouseenter}
            {onmouseleave}
        >
            <IconView icon={detail.icon} />
            <div>
                <h4>{detail.title}</h4>
                { for detail.lines.iter().map(|line| html! { <p key={*line}>{*line}</p> }) }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Control {
    Input(&'static str),
    Select,
    TextArea,
}

#[derive(Properties, PartialEq)]
struct FloatingFieldProps {
    field: Field,
    label: &'static str,
    control: Control,
    value: AttrValue,
    focused: bool,
    filled: bool,
    #[prop_or_default]
    required: bool,
    on_change: Callback<(Field, String)>,
    on_focus: Callback<Option<Field>>,
}

#[function_component(FloatingField)]
fn floating_field(props: &FloatingFieldProps) -> Html {
    let field = props.field;
    let name = field.name();

    // Keystrokes are routed by the control's `name` attribute.
    let emit = {
        let on_change = props.on_change.clone();
        move |target_name: String, value: String| match Field::from_name(&target_name) {
            Some(field) => on_change.emit((field, value)),
            None => warn!("ignoring input from unknown control `{}`", target_name),
        }
    };
    let onfocus = {
        let on_focus = props.on_focus.clone();
        Callback::from(move |_: FocusEvent| on_focus.emit(Some(field)))
    };
    let onblur = {
        let on_focus = props.on_focus.clone();
        Callback::from(move |_: FocusEvent| on_focus.emit(None))
    };

    let control = match props.control {
        Control::Input(kind) => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                emit(input.name(), input.value());
            });
            html! {
                <input
                    type={kind}
                    id={name}
                    name={name}
                    required={props.required}
                    value={props.value.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            }
        }
        Control::Select => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                emit(select.name(), select.value());
            });
            html! {
                <select id={name} name={name} {onchange} {onfocus} {onblur}>
                    { for SERVICE_INTERESTS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={&*props.value == *value}>{*label}</option>
                    }) }
                </select>
            }
        }
        Control::TextArea => {
            let oninput = Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                emit(area.name(), area.value());
            });
            html! {
                <textarea
                    id={name}
                    name={name}
                    rows="5"
                    value={props.value.clone()}
                    {oninput}
                    {onfocus}
                    {onblur}
                />
            }
        }
    };

    let raised = props.focused || props.filled;

    html! {
        <div class={classes!("floating-field", props.focused.then(|| "focused"), raised.then(|| "raised"))}>
            <label for={name}>{props.label}</label>
            { control }
            <div class="field-underline"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SubmitButtonProps {
    phase: SubmitPhase,
}

#[function_component(SubmitButton)]
fn submit_button(props: &SubmitButtonProps) -> Html {
    let phase = props.phase;
    html! {
        <button type="submit" class={classes!("submit-button", phase.class())} disabled={phase.is_busy()}>
            {
                match phase {
                    SubmitPhase::Submitted => html! {
                        <>
                            <IconView icon={Icon::CheckCircle} />
                            {phase.label()}
                        </>
                    },
                    SubmitPhase::Submitting => html! {
                        <>
                            <div class="spinner"></div>
                            {phase.label()}
                        </>
                    },
                    SubmitPhase::Idle => html! {
                        <>
                            {phase.label()}
                            <IconView icon={Icon::Send} />
                        </>
                    },
                }
            }
        </button>
    }
}

#[function_component(GetInTouch)]
pub fn get_in_touch() -> Html {
    let node = use_node_ref();
    let is_visible = use_reveal(node.clone(), config::CONTACT_THRESHOLD);
    let state = use_reducer(ContactState::default);
    let focused = use_state(|| None::<Field>);

    // Each busy phase arms one timer; leaving the phase or the page drops it.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |phase: &SubmitPhase| {
                let pending = phase
                    .hold_ms()
                    .map(|ms| Timeout::new(ms, move || dispatcher.dispatch(FormAction::Advance)));
                move || drop(pending)
            },
            state.phase,
        );
    }

    let on_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (Field, String)| dispatcher.dispatch(FormAction::Set(field, value)))
    };
    let on_focus = {
        let focused = focused.clone();
        Callback::from(move |field: Option<Field>| focused.set(field))
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = state.phase.begin() {
                warn!("ignoring submit: {}", e);
                return;
            }

            // Nothing leaves the browser; the payload is only logged.
            match serde_json::to_string(&state.form) {
                Ok(payload) => debug!("simulating contact submission: {}", payload),
                Err(e) => warn!("could not serialize contact form: {}", e),
            }
            state.dispatch(FormAction::Submit);
        })
    };

    let render_field = |field: Field, label: &'static str, control: Control, required: bool| {
        html! {
            <FloatingField
                {field}
                {label}
                {control}
                {required}
                value={AttrValue::from(state.form.get(field).to_string())}
                focused={*focused == Some(field)}
                filled={state.form.has_value(field)}
                on_change={on_change.clone()}
                on_focus={on_focus.clone()}
            />
        }
    };

    html! {
        <section id="contact" ref={node} class={classes!("contact-section", is_visible.then(|| "visible"))}>
            <style>{CONTACT_CSS}</style>
            <div class="blob blob-blue"></div>
            <div class="blob blob-purple" style="animation-delay: 2s;"></div>
            <div class="dot-grid"></div>

            <div class="container">
                <div class="section-header">
                    <h2>{"Get In Touch"}</h2>
                    <div class="section-divider"></div>
                    <p>{"Ready to protect what matters most? Contact us today for a personalized insurance quote."}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>{"Contact Information"}</h3>
                        { for CONTACT_DETAILS.iter().enumerate().map(|(i, detail)| html! {
                            <InfoCard key={detail.title} detail={*detail} delay={stagger(800, i, 200)} />
                        }) }
                    </div>

                    <div class="contact-panel">
                        <h3>{"Send Us A Message"}</h3>
                        <form {onsubmit}>
                            <div class="form-row">
                                { render_field(Field::Name, "Full Name", Control::Input("text"), true) }
                                { render_field(Field::Email, "Email Address", Control::Input("email"), true) }
                            </div>
                            <div class="form-row">
                                { render_field(Field::Phone, "Phone Number", Control::Input("tel"), false) }
                                { render_field(Field::Service, "Service Interest", Control::Select, false) }
                            </div>
                            { render_field(Field::Message, "Your Message", Control::TextArea, false) }
                            <SubmitButton phase={state.phase} />
                        </form>
                    </div>
                </div>

                <div class="call-cta">
                    <p>{"Prefer to speak directly? Give us a call!"}</p>
                    <a href={PHONE_HREF}>
                        <IconView icon={Icon::Phone} />
                        {PHONE_DISPLAY}
                    </a>
                </div>
            </div>
        </section>
    }
}

use log::info;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// What the visitor typed so far. Nothing is sent anywhere; a delivery
/// backend would consume this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.email.contains('@') && !self.message.trim().is_empty()
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let acknowledged = use_state(|| false);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let acknowledged = acknowledged.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !draft.is_complete() {
                return;
            }
            info!("contact form submitted with no delivery backend configured");
            let form: HtmlFormElement = e.target_unchecked_into();
            form.reset();
            draft.set(ContactDraft::default());
            acknowledged.set(true);
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <input type="text" placeholder="Name" required=true value={draft.name.clone()} oninput={on_name} />
            <input type="email" placeholder="Email" required=true value={draft.email.clone()} oninput={on_email} />
            <textarea rows="4" placeholder="Message" required=true value={draft.message.clone()} oninput={on_message} />
            <button type="submit" class="cta-button">{"Send Message"}</button>
            {
                if *acknowledged {
                    html! { <p class="contact-ack">{"Thanks! We'll be in touch."}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_incomplete() {
        assert!(!ContactDraft::default().is_complete());
    }

    #[test]
    fn complete_draft_needs_all_fields() {
        let draft = ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        assert!(draft.is_complete());
        assert!(!ContactDraft { message: "   ".into(), ..draft.clone() }.is_complete());
        assert!(!ContactDraft { email: "ada".into(), ..draft }.is_complete());
    }
}

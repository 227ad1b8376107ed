use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub on_toggle: Callback<usize>,
}

/// The answer is only part of the markup while the item is open.
fn visible_answer(answer: &'static str, open: bool) -> Option<&'static str> {
    open.then_some(answer)
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let index = props.index;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <h3>{props.question}</h3>
                <svg class="faq-chevron" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                </svg>
            </button>
            {
                match visible_answer(props.answer, props.open) {
                    Some(answer) => html! {
                        <div id={format!("answer-{}", props.index)} class="faq-answer">
                            {answer}
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;
    use crate::state::toggle::ToggleSet;

    #[test]
    fn answer_hidden_until_opened() {
        let answer = FAQS[0].answer;
        assert_eq!(visible_answer(answer, false), None);
        assert_eq!(visible_answer(answer, true), Some(answer));
    }

    #[test]
    fn only_open_items_render_answers() {
        let mut faq = ToggleSet::new(FAQS.len());
        faq.toggle(2);
        faq.toggle(5);
        let rendered: Vec<usize> = FAQS
            .iter()
            .enumerate()
            .filter(|(i, item)| visible_answer(item.answer, faq.is_open(*i)).is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(rendered, vec![2, 5]);
    }
}

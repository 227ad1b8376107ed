use yew::prelude::*;

use crate::state::countdown::format_time;

#[derive(Properties, PartialEq)]
pub struct CountdownTextProps {
    pub remaining: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CountdownText)]
pub fn countdown_text(props: &CountdownTextProps) -> Html {
    html! {
        <span class={classes!("countdown", props.class.clone())}>
            {format_time(props.remaining)}
        </span>
    }
}

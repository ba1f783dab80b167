//! Toast notifications

use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    message,
                });
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: UseReducerHandle<ToastList>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    // Each toast expires on its own timer, armed the first time it shows up.
    {
        let armed_from = use_mut_ref(|| 0_u64);
        let ids: Vec<u64> = props.toasts.toasts.iter().map(|toast| toast.id).collect();
        let dispatcher = props.toasts.dispatcher();
        use_effect_with(ids, move |ids| {
            let mut armed_from = armed_from.borrow_mut();
            for &id in ids.iter().filter(|&&id| id >= *armed_from) {
                let dispatcher = dispatcher.clone();
                Timeout::new(TOAST_LIFETIME_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }
            if let Some(newest) = ids.iter().max() {
                *armed_from = newest + 1;
            }
        });
    }

    html! {
        <div class="toast-container">
            { for props.toasts.toasts.iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                let on_dismiss = {
                    let dispatcher = props.toasts.dispatcher();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
                };
                html! {
                    <div key={toast.id} {class} onclick={on_dismiss}>{ &toast.message }</div>
                }
            }) }
        </div>
    }
}

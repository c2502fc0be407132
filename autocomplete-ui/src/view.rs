//! Component yew bọc widget autocomplete.

use autocomplete_core::scroll::{scroll_to_reveal, Span};
use autocomplete_core::{
    Autocomplete, DropdownOption, Key, MenuRow, SelectMode, SelectionEvent, WidgetConfig, WidgetId,
};
use wasm_bindgen::JsCast;
use web_sys::{console, Element, HtmlElement, HtmlInputElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::page;

pub enum Msg {
    Open,
    Close,
    Input(String),
    Key(Key),
    CommitAt(usize),
    Commit(DropdownOption),
    Remove(String),
    SetOptions(Vec<DropdownOption>),
    Clear,
}

#[derive(Properties, PartialEq)]
pub struct AutocompleteViewProps {
    pub anchor: Element,
    pub config: WidgetConfig,
    pub options: Vec<DropdownOption>,
    /// Tên của input ẩn chứa giá trị form.
    pub name: Option<AttrValue>,
    pub on_select: Callback<SelectionEvent>,
}

pub struct AutocompleteView {
    widget: Autocomplete,
    widget_id: WidgetId,
    input_ref: NodeRef,
    menu_ref: NodeRef,
    refocus: bool,
    reveal_highlight: bool,
}

impl Component for AutocompleteView {
    type Message = Msg;
    type Properties = AutocompleteViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let widget = Autocomplete::with_options(props.config.clone(), props.options.clone());
        let widget_id = page::register(props.anchor.clone(), ctx.link().clone());

        Self {
            widget,
            widget_id,
            input_ref: NodeRef::default(),
            menu_ref: NodeRef::default(),
            refocus: false,
            reveal_highlight: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                self.reveal_highlight = true;
                self.widget.open()
            }
            Msg::Close => self.widget.close(),
            Msg::Input(text) => {
                self.widget.input(text);
                self.reveal_highlight = true;
                true
            }
            Msg::Key(key) => {
                let outcome = self.widget.handle_key(key);
                if let Some(event) = outcome.event {
                    self.emit(ctx, event);
                }
                self.reveal_highlight = outcome.handled;
                outcome.handled
            }
            Msg::CommitAt(position) => {
                let event = self.widget.commit_at(position);
                self.emit_committed(ctx, event)
            }
            Msg::Commit(option) => {
                let event = self.widget.commit(&option);
                self.emit_committed(ctx, event)
            }
            Msg::Remove(value) => match self.widget.remove(&value) {
                Some(event) => {
                    ctx.props().on_select.emit(event);
                    true
                }
                None => false,
            },
            Msg::SetOptions(options) => {
                self.widget.set_options(options);
                true
            }
            Msg::Clear => {
                self.widget.clear_selection();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = self.widget.config();
        let is_open = self.widget.is_open();
        let link = ctx.link();

        let oninput = link.callback(|event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            Msg::Input(input.value())
        });

        let onkeydown = link.batch_callback(move |event: KeyboardEvent| {
            let key = Key::from_dom(&event.key());
            if key == Key::Other {
                return None;
            }
            if key.is_intercepted(is_open) {
                event.prevent_default();
                event.stop_propagation();
            }
            Some(Msg::Key(key))
        });

        let onopen = link.callback(|_: MouseEvent| Msg::Open);
        let onfocus = link.callback(|_: FocusEvent| Msg::Open);
        let mode_class = match config.mode {
            SelectMode::Single => "single",
            SelectMode::Multi => "multi",
        };

        html! {
            <div class={classes!("autocomplete", mode_class, is_open.then_some("is-open"))}>
                { self.view_tokens(ctx) }
                <input
                    ref={self.input_ref.clone()}
                    type="text"
                    class="autocomplete-input"
                    role="combobox"
                    autocomplete="off"
                    aria-autocomplete="list"
                    aria-expanded={is_open.to_string()}
                    placeholder={config.placeholder.clone()}
                    value={self.widget.query().to_string()}
                    oninput={oninput}
                    onkeydown={onkeydown}
                    onclick={onopen}
                    onfocus={onfocus}
                />
                <input
                    type="hidden"
                    class="autocomplete-value"
                    name={ctx.props().name.clone()}
                    value={self.widget.form_value()}
                />
                {
                    if is_open {
                        html! {
                            <div ref={self.menu_ref.clone()} class="autocomplete-menu" role="listbox">
                                {
                                    for self.widget.menu().into_iter().enumerate().map(|(position, row)| {
                                        view_row(ctx, position, row)
                                    })
                                }
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.refocus) {
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    console::error_1(&err);
                }
            }
        }

        if std::mem::take(&mut self.reveal_highlight) {
            self.reveal_highlighted();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        page::unregister(self.widget_id);
    }
}

impl AutocompleteView {
    fn emit(&mut self, ctx: &Context<Self>, event: SelectionEvent) {
        if self.widget.mode() == SelectMode::Multi {
            self.refocus = true;
        }
        ctx.props().on_select.emit(event);
    }

    fn emit_committed(&mut self, ctx: &Context<Self>, event: Option<SelectionEvent>) -> bool {
        match event {
            Some(event) => {
                self.emit(ctx, event);
                true
            }
            None => false,
        }
    }

    fn view_tokens(&self, ctx: &Context<Self>) -> Html {
        if self.widget.mode() != SelectMode::Multi {
            return Html::default();
        }

        html! {
            <div class="autocomplete-tokens">
                {
                    for self.widget.tokens().iter().map(|token| {
                        let value = token.value.clone();
                        let onremove = ctx.link().callback(move |event: MouseEvent| {
                            event.stop_propagation();
                            Msg::Remove(value.clone())
                        });

                        html! {
                            <span class="autocomplete-token" data-value={token.value.clone()}>
                                { token.label.clone() }
                                <button
                                    type="button"
                                    class="autocomplete-token-remove"
                                    aria-label={format!("Remove {}", token.label)}
                                    onclick={onremove}
                                >
                                    {"×"}
                                </button>
                            </span>
                        }
                    })
                }
            </div>
        }
    }

    fn reveal_highlighted(&self) {
        let Some(menu) = self.menu_ref.cast::<HtmlElement>() else {
            return;
        };

        let row = match menu.query_selector(".autocomplete-option.is-highlighted") {
            Ok(Some(row)) => row,
            Ok(None) => return,
            Err(err) => {
                console::error_1(&err);
                return;
            }
        };
        let Ok(row) = row.dyn_into::<HtmlElement>() else {
            return;
        };

        let row_span = Span::new(f64::from(row.offset_top()), f64::from(row.offset_height()));
        let viewport = Span::new(f64::from(menu.scroll_top()), f64::from(menu.client_height()));
        if let Some(top) = scroll_to_reveal(row_span, viewport) {
            menu.set_scroll_top(top.round() as i32);
        }
    }
}

fn view_row(ctx: &Context<AutocompleteView>, position: usize, row: MenuRow) -> Html {
    match row {
        MenuRow::Option {
            label,
            value,
            highlighted,
            selected,
        } => {
            let onclick = ctx.link().callback(move |_: MouseEvent| Msg::CommitAt(position));
            // Giữ focus ở ô nhập khi click vào dòng.
            let onmousedown = Callback::from(|event: MouseEvent| event.prevent_default());

            html! {
                <div
                    class={classes!(
                        "autocomplete-option",
                        highlighted.then_some("is-highlighted"),
                        selected.then_some("is-selected")
                    )}
                    role="option"
                    aria-selected={selected.to_string()}
                    data-value={value}
                    onmousedown={onmousedown}
                    onclick={onclick}
                >
                    { label }
                </div>
            }
        }
        MenuRow::Placeholder { label } => html! {
            <div class="autocomplete-option is-placeholder" role="option" aria-disabled="true">
                { label }
            </div>
        },
    }
}

//! Host loop
//!
//! The host mounts views, subscribes to their stores and re-invokes `render`
//! whenever one of them reports a state transition. It also owns keyboard
//! focus, which is a single index over the interactive nodes of all mounted
//! views, in mount order.

use std::cell::Cell;
use std::rc::Rc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::{
    action::Action,
    core::element::{Element, Interactive},
    infrastructure::{
        cli::ViewSelection,
        tui::{Event, Frame, TuiLike},
    },
    presentation::{
        components::{Button, Input},
        config::KeyBindings,
        views::{Analytics, Dashboard, View},
        widgets::ElementWidget,
    },
};

pub struct Host {
    views: Vec<Box<dyn View>>,
    keybindings: KeyBindings,
    dirty: Rc<Cell<bool>>,
    focus: usize,
    should_quit: bool,
    render_count: usize,
}

impl Host {
    pub fn new(views: Vec<Box<dyn View>>, keybindings: KeyBindings) -> Self {
        let dirty = Rc::new(Cell::new(true));
        for view in &views {
            let flag = Rc::clone(&dirty);
            view.subscribe(Box::new(move || flag.set(true)));
            log::debug!("mounted view {}", view.name());
        }

        Self {
            views,
            keybindings,
            dirty,
            focus: 0,
            should_quit: false,
            render_count: 0,
        }
    }

    /// Mount the views named by the CLI selection, each with fresh state.
    pub fn with_selection(selection: ViewSelection, keybindings: KeyBindings) -> Self {
        let views: Vec<Box<dyn View>> = match selection {
            ViewSelection::Analytics => vec![Box::new(Analytics::new())],
            ViewSelection::Dashboard => vec![Box::new(Dashboard::new())],
            ViewSelection::All => vec![Box::new(Analytics::new()), Box::new(Dashboard::new())],
        };
        Self::new(views, keybindings)
    }

    pub fn views(&self) -> &[Box<dyn View>] {
        &self.views
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Focused index, if any view has interactive nodes
    pub fn focus(&self) -> Option<usize> {
        let len = self.interactives().len();
        (len > 0).then(|| self.focus.min(len - 1))
    }

    fn elements(&self) -> Vec<Element> {
        self.views.iter().map(|view| view.render()).collect()
    }

    fn interactives(&self) -> Vec<Interactive> {
        self.elements()
            .iter()
            .flat_map(Element::interactives)
            .collect()
    }

    fn focused(&self) -> Option<Interactive> {
        let focus = self.focus()?;
        self.interactives().into_iter().nth(focus)
    }

    /// Map a key press to an action.
    ///
    /// While an input has focus, plain editing keys go to the input before
    /// any keybinding is consulted.
    pub fn translate(&self, key: KeyEvent) -> Action {
        if matches!(self.focused(), Some(Interactive::Input { .. })) && is_text_edit(&key) {
            return Action::Key(key);
        }
        self.keybindings
            .action_for(&key)
            .cloned()
            .unwrap_or(Action::Key(key))
    }

    pub fn action_for_event(&self, event: Event) -> Option<Action> {
        match event {
            Event::Quit | Event::Closed => Some(Action::Quit),
            Event::Key(key) => Some(self.translate(key)),
            Event::Paste(text) => Some(Action::Paste(text)),
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::FocusGained => Some(Action::Render),
            Event::Error => Some(Action::Error("terminal event error".to_owned())),
            Event::Init | Event::Tick | Event::Render | Event::FocusLost | Event::Mouse(_) => {
                None
            }
        }
    }

    pub fn handle(&mut self, action: Action) {
        tracing::debug!(%action, "handle");
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::Activate => self.activate(),
            Action::Key(key) => match self.focused() {
                Some(Interactive::Input { value, on_change }) if is_text_edit(&key) => {
                    Input::change(&value, on_change.as_ref(), key);
                }
                Some(Interactive::Button { on_activate })
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) =>
                {
                    Button::activate(on_activate.as_ref());
                }
                _ => {}
            },
            Action::Paste(text) => {
                if let Some(Interactive::Input { value, on_change }) = self.focused() {
                    Input::paste(&value, on_change.as_ref(), &text);
                }
            }
            Action::Render | Action::Resize(_, _) => self.dirty.set(true),
            Action::Error(message) => tracing::error!("{message}"),
        }
    }

    fn move_focus(&mut self, step: isize) {
        let len = self.interactives().len();
        if len == 0 {
            return;
        }
        let current = self.focus.min(len - 1) as isize;
        self.focus = (current + step).rem_euclid(len as isize) as usize;
        self.dirty.set(true);
    }

    fn activate(&mut self) {
        if let Some(Interactive::Button { on_activate }) = self.focused() {
            Button::activate(on_activate.as_ref());
        }
    }

    /// Render every view into its own titled block, top to bottom.
    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let elements = self.elements();
        let focus = self.focus();

        let mut constraints: Vec<Constraint> = elements
            .iter()
            .map(|element| Constraint::Length(element.height().saturating_add(2)))
            .collect();
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(frame.area());

        let mut start = 0;
        for ((view, element), area) in self.views.iter().zip(&elements).zip(areas.iter()) {
            let count = element.interactives().len();
            let local_focus = focus
                .filter(|f| (start..start + count).contains(f))
                .map(|f| f - start);
            start += count;

            let block = Block::bordered().title(view.name());
            let inner = block.inner(*area);
            frame.render_widget(block, *area);
            frame.render_widget(ElementWidget::new(element).focused(local_focus), inner);
        }

        self.dirty.set(false);
        self.render_count += 1;
    }

    pub fn render(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        tui.draw(&mut |frame: &mut Frame<'_>| self.draw(frame))
    }

    /// Drive the views until a quit action or the end of the event stream.
    pub async fn run(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        tui.enter()?;
        let result = self.event_loop(tui).await;
        tui.exit()?;
        result
    }

    async fn event_loop(&mut self, tui: &mut dyn TuiLike) -> Result<()> {
        self.render(tui)?;
        while !self.should_quit {
            let Some(event) = tui.next().await else {
                log::info!("event stream closed");
                break;
            };
            if let Event::Resize(w, h) = event {
                tui.resize(Rect::new(0, 0, w, h))?;
            }
            if let Some(action) = self.action_for_event(event) {
                self.handle(action);
            }
            if self.is_dirty() && !self.should_quit {
                self.render(tui)?;
            }
        }
        Ok(())
    }
}

/// Keys that edit text rather than drive the host
fn is_text_edit(key: &KeyEvent) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
    )
}

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use showmatch_terminal::match_info::MatchStatus;
use showmatch_terminal::prediction::TeamSlot;
use showmatch_terminal::state::{AppState, Focus, PredictionRow, RegistrationRow, blocker_label};
use showmatch_terminal::vote::VoteBoard;

struct App {
    state: AppState,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    fn new() -> Self {
        let tick_ms = std::env::var("TICK_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(250)
            .max(50);
        Self {
            state: AppState::new(),
            should_quit: false,
            tick_rate: Duration::from_millis(tick_ms),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        // Text entry modes own the keyboard while active.
        if self.state.vote_entry.is_some() {
            match key.code {
                KeyCode::Enter => self.state.commit_vote_entry(),
                KeyCode::Esc => self.state.cancel_vote_entry(),
                KeyCode::Backspace => self.state.vote_entry_backspace(),
                KeyCode::Char(ch) => self.state.vote_entry_push(ch),
                _ => {}
            }
            return;
        }
        if self.state.reg_editing {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.state.end_reg_editing(),
                KeyCode::Backspace => self.state.reg_text_backspace(),
                KeyCode::Char(ch) => self.state.reg_text_push(ch),
                _ => {}
            }
            return;
        }

        // Score rows eat digits (and a leading minus, which the parser then
        // clamps away) before the global bindings see them.
        if self.state.focus == Focus::Prediction
            && self.state.prediction_row.score_slot().is_some()
        {
            match key.code {
                KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => {
                    self.state.score_entry_push(ch);
                    return;
                }
                KeyCode::Backspace => {
                    self.state.score_entry_backspace();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('r') => self.state.reset_session(),
            KeyCode::Tab => self.state.cycle_focus_next(),
            KeyCode::BackTab => self.state.cycle_focus_prev(),
            KeyCode::Char('j') | KeyCode::Down => self.row_next(),
            KeyCode::Char('k') | KeyCode::Up => self.row_prev(),
            KeyCode::Char('v') if self.state.focus == Focus::Voting => self.state.cast_vote(),
            KeyCode::Char('a') if self.state.focus == Focus::Voting => {
                self.state.begin_vote_entry()
            }
            KeyCode::Char('h') | KeyCode::Left => self.cycle_select_prev(),
            KeyCode::Char('l') | KeyCode::Right => self.cycle_select_next(),
            KeyCode::Enter => self.activate(),
            _ => {}
        }
    }

    fn row_next(&mut self) {
        match self.state.focus {
            Focus::Voting => self.state.select_vote_next(),
            Focus::Prediction => self.state.prediction_row_next(),
            Focus::Registration => self.state.registration_row_next(),
        }
    }

    fn row_prev(&mut self) {
        match self.state.focus {
            Focus::Voting => self.state.select_vote_prev(),
            Focus::Prediction => self.state.prediction_row_prev(),
            Focus::Registration => self.state.registration_row_prev(),
        }
    }

    fn cycle_select_next(&mut self) {
        if self.state.focus != Focus::Registration {
            return;
        }
        match self.state.registration_row {
            RegistrationRow::Rank => self.state.registration.cycle_rank_next(),
            RegistrationRow::Role => self.state.registration.cycle_role_next(),
            _ => {}
        }
    }

    fn cycle_select_prev(&mut self) {
        if self.state.focus != Focus::Registration {
            return;
        }
        match self.state.registration_row {
            RegistrationRow::Rank => self.state.registration.cycle_rank_prev(),
            RegistrationRow::Role => self.state.registration.cycle_role_prev(),
            _ => {}
        }
    }

    fn activate(&mut self) {
        match self.state.focus {
            Focus::Voting => self.state.cast_vote(),
            Focus::Prediction => match self.state.prediction_row {
                PredictionRow::PickHome => self.state.pick_winner(TeamSlot::Home),
                PredictionRow::PickAway => self.state.pick_winner(TeamSlot::Away),
                PredictionRow::Submit => self.state.submit_prediction(),
                PredictionRow::HomeScore | PredictionRow::AwayScore => {
                    self.state.prediction_row_next()
                }
            },
            Focus::Registration => match self.state.registration_row {
                RegistrationRow::Name | RegistrationRow::Discord => {
                    self.state.begin_reg_editing()
                }
                RegistrationRow::Rank => self.state.registration.cycle_rank_next(),
                RegistrationRow::Role => self.state.registration.cycle_role_next(),
                RegistrationRow::Register => self.state.register_player(),
            },
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alt screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("create terminal")?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("leave alt screen")?;
    terminal.show_cursor().context("restore cursor")?;

    res.context("event loop")
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = app
            .tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(12),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_match_info(frame, chunks[1], &app.state);

    let widgets = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[2]);

    render_voting(frame, widgets[0], &app.state);
    render_prediction(frame, widgets[1], &app.state);
    render_registration(frame, widgets[2], &app.state);

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[3]);

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[4]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let line1 = format!(
        "  .-.  SHOWMATCH TERMINAL | {} | {}",
        state.match_info.title(),
        state.match_info.status.label()
    );
    let line2 = " /___\\".to_string();
    let line3 = "  |_|".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    if state.vote_entry.is_some() {
        return "Type option | Enter Add | Esc Cancel".to_string();
    }
    if state.reg_editing {
        return "Type value | Enter/Esc Done".to_string();
    }
    match state.focus {
        Focus::Voting => {
            "Tab Section | j/k Move | Enter/v Vote | a Add option | r Reset | ? Help | q Quit"
                .to_string()
        }
        Focus::Prediction => {
            "Tab Section | j/k Rows | 0-9 Score | Enter Pick/Submit | r Reset | ? Help | q Quit"
                .to_string()
        }
        Focus::Registration => {
            "Tab Section | j/k Rows | Enter Edit/Cycle | h/l Cycle | r Reset | ? Help | q Quit"
                .to_string()
        }
    }
}

fn section_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(style)
}

fn render_match_info(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Match").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let info = &state.match_info;
    let status_color = match info.status {
        MatchStatus::Upcoming => Color::Red,
        MatchStatus::Live => Color::Green,
        MatchStatus::Completed => Color::DarkGray,
    };

    let versus = Line::from(vec![
        Span::styled(
            info.home.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({})", info.home_subtitle)),
        Span::styled("  VS  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            info.away.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({})", info.away_subtitle)),
        Span::raw("   "),
        Span::styled(
            format!(" {} ", info.status.label()),
            Style::default().fg(Color::White).bg(status_color),
        ),
    ]);

    let left = format!(
        "Map: {}\nMode: {}\nBest of: {}",
        info.map, info.mode, info.best_of
    );
    let right = format!(
        "Date: {}\nFormat: {}",
        info.kickoff_display(),
        info.side_format
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    frame.render_widget(Paragraph::new(versus), rows[0]);

    let grid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    frame.render_widget(Paragraph::new(left), grid[0]);
    frame.render_widget(Paragraph::new(right), grid[1]);
}

fn render_voting(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Voting;
    let block = section_block("Streamer Vote", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let chart_height = if inner.height > 8 { 3 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(chart_height),
        ])
        .split(inner);

    let question = Paragraph::new("What do you want streamer to do?")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(question, rows[0]);

    let mut lines = Vec::new();
    for (idx, option) in state.votes.options().iter().enumerate() {
        let prefix = if focused && idx == state.vote_selected {
            "> "
        } else {
            "  "
        };
        lines.push(format!("{prefix}{}  Vote ({})", option.label, option.votes));
    }
    frame.render_widget(Paragraph::new(lines.join("\n")), rows[1]);

    let entry_line = match &state.vote_entry {
        Some(entry) => format!("New option: {entry}_"),
        None => format!("Total votes: {}", state.votes.total_votes()),
    };
    frame.render_widget(
        Paragraph::new(entry_line).style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );

    if chart_height > 0 {
        frame.render_widget(vote_bar_chart(&state.votes), rows[3]);
    }
}

fn vote_bar_chart(votes: &VoteBoard) -> BarChart<'static> {
    let bars: Vec<Bar> = votes
        .options()
        .iter()
        .map(|option| {
            Bar::default()
                .value(option.votes as u64)
                .text_value(String::new())
                .style(Style::default().fg(Color::Green))
        })
        .collect();
    let max = votes
        .options()
        .iter()
        .map(|option| option.votes as u64)
        .max()
        .unwrap_or(0)
        .max(1);

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(0)
        .max(max)
}

fn render_prediction(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Prediction;
    let block = section_block("Predict the Match", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if state.board.is_submitted() {
        let (score_home, score_away) = state.board.scores();
        let text = vec![
            Line::from(Span::styled(
                "Prediction Submitted!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "You predicted {} to win {} - {}",
                state.board.winner_name().unwrap_or("?"),
                score_home,
                score_away
            )),
        ];
        frame.render_widget(Paragraph::new(text), inner);
        return;
    }

    let cursor = |row: PredictionRow| {
        if focused && state.prediction_row == row {
            "> "
        } else {
            "  "
        }
    };
    let pick_mark = |slot: TeamSlot| {
        if state.board.winner() == Some(slot) {
            "[x]"
        } else {
            "[ ]"
        }
    };
    let score_cell = |row: PredictionRow, slot: TeamSlot| {
        if focused && state.prediction_row == row {
            format!("{}_", state.score_entry)
        } else {
            state.board.score(slot).to_string()
        }
    };

    let mut lines = vec![
        Line::from(format!(
            "{}{}: {}",
            cursor(PredictionRow::HomeScore),
            state.board.team_name(TeamSlot::Home),
            score_cell(PredictionRow::HomeScore, TeamSlot::Home)
        )),
        Line::from(format!(
            "{}{}: {}",
            cursor(PredictionRow::AwayScore),
            state.board.team_name(TeamSlot::Away),
            score_cell(PredictionRow::AwayScore, TeamSlot::Away)
        )),
        Line::from(""),
        Line::from("Who will win?"),
        Line::from(format!(
            "{}{} {}",
            cursor(PredictionRow::PickHome),
            pick_mark(TeamSlot::Home),
            state.board.team_name(TeamSlot::Home)
        )),
        Line::from(format!(
            "{}{} {}",
            cursor(PredictionRow::PickAway),
            pick_mark(TeamSlot::Away),
            state.board.team_name(TeamSlot::Away)
        )),
        Line::from(""),
    ];

    match state.board.submit_blocker() {
        None => lines.push(Line::from(vec![
            Span::raw(cursor(PredictionRow::Submit)),
            Span::styled("[ Submit Prediction ]", Style::default().fg(Color::Green)),
        ])),
        Some(blocker) => lines.push(Line::from(vec![
            Span::raw(cursor(PredictionRow::Submit)),
            Span::styled(
                "[ Submit Prediction ]",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {}", blocker_label(blocker)),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_registration(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Registration;
    let block = section_block("Register to Play", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let form = &state.registration;
    if form.is_registered() {
        let text = vec![
            Line::from(Span::styled(
                "Registered!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Name: {}", form.name.trim())),
            Line::from(format!(
                "Rank: {}  Role: {}",
                form.rank.map(|r| r.label()).unwrap_or("-"),
                form.role.map(|r| r.label()).unwrap_or("-")
            )),
            Line::from(format!(
                "Discord: {}",
                if form.discord.trim().is_empty() {
                    "-"
                } else {
                    form.discord.trim()
                }
            )),
        ];
        frame.render_widget(Paragraph::new(text), inner);
        return;
    }

    let cursor = |row: RegistrationRow| {
        if focused && state.registration_row == row {
            "> "
        } else {
            "  "
        }
    };
    let text_cell = |row: RegistrationRow, value: &str| {
        if state.reg_editing && state.registration_row == row {
            format!("{value}_")
        } else if value.is_empty() {
            "...".to_string()
        } else {
            value.to_string()
        }
    };

    let lines = vec![
        format!(
            "{}Name: {}",
            cursor(RegistrationRow::Name),
            text_cell(RegistrationRow::Name, &form.name)
        ),
        format!(
            "{}Rank: {}",
            cursor(RegistrationRow::Rank),
            form.rank.map(|r| r.label()).unwrap_or("Select Rank")
        ),
        format!(
            "{}Role: {}",
            cursor(RegistrationRow::Role),
            form.role.map(|r| r.label()).unwrap_or("Select Role")
        ),
        format!(
            "{}Discord: {}",
            cursor(RegistrationRow::Discord),
            text_cell(RegistrationRow::Discord, &form.discord)
        ),
        String::new(),
        format!("{}[ Register ]", cursor(RegistrationRow::Register)),
    ];
    frame.render_widget(Paragraph::new(lines.join("\n")), inner);
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No activity yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Showmatch Terminal - Help",
        "",
        "Global:",
        "  Tab / S-Tab  Cycle section",
        "  j/k or ↑/↓   Move",
        "  r            Reset session",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Voting:",
        "  Enter / v    Vote for option",
        "  a            Add a new option",
        "",
        "Prediction:",
        "  0-9 / Bksp   Edit score",
        "  Enter        Pick winner / submit",
        "",
        "Registration:",
        "  Enter        Edit field / cycle select",
        "  h/l          Cycle rank or role",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

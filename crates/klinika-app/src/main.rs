//! Klinika shell binary - composition root.
//!
//! Ties the Klinika crates together into one interactive executable:
//! 1. Parse CLI args and load TOML configuration
//! 2. Initialize tracing
//! 3. Build the shared reqwest client and the endpoint clients
//! 4. Fetch contacts (falling back to the built-in defaults) and print
//!    the site header
//! 5. Drive the search overlay, chat widget, and card panel from a
//!    line-based REPL; debounce settling and alert expiry run off
//!    `tokio::select!` deadlines

mod cli;

use std::io::Write as _;
use std::time::{Duration, Instant};

use clap::Parser;
use tokio::io::AsyncBufReadExt;

use klinika_chat::{ChatWidget, SendOutcome, Transcript};
use klinika_client::{AuthClient, ChatClient, ContactsClient, CredentialProvider, SearchClient};
use klinika_core::config::KlinikaConfig;
use klinika_core::types::{Contacts, Credentials, NavItem, RegisterRequest, Role};
use klinika_core::{KlinikaError, Result};
use klinika_search::{Fragment, OverlayView, SearchBackend, SearchOverlay};
use klinika_ui::nav::routes;
use klinika_ui::{
    format_phone_input, normalize_phone, ActiveOverlay, AlertLevel, AuthModal, CardLayout,
    CardPanel, Navigator, RouteLog, UiSessionState,
};

use cli::CliArgs;

/// Everything the REPL mutates between commands.
struct Shell {
    session: UiSessionState,
    overlay: SearchOverlay,
    widget: ChatWidget<ChatClient>,
    panel: CardPanel,
    routes: RouteLog,
    auth: AuthClient,
    contacts: Contacts,
    menu: Vec<NavItem>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config_path = args.resolve_config_path();
    let mut config = KlinikaConfig::load_or_default(&config_path);
    config.api.base_url = args.resolve_base_url(&config.api.base_url);

    let log_level = args.resolve_log_level(&config.general.log_level);
    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(base_url = %config.api.base_url, "Klinika shell starting");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()
        .map_err(|e| KlinikaError::Http(e.to_string()))?;

    let search_client = SearchClient::new(http.clone(), &config.api);
    let chat_client = ChatClient::new(http.clone(), &config.api);
    let auth_client = AuthClient::new(http.clone(), &config.api);
    let contacts_client = ContactsClient::new(http, &config.api);

    let contacts = contacts_client.fetch_or_default(&config.contacts).await;

    let mut shell = Shell {
        session: UiSessionState::new(Duration::from_millis(config.alerts.ttl_ms)),
        overlay: SearchOverlay::new(&config.search),
        widget: ChatWidget::new(&config.chat, chat_client),
        panel: CardPanel::new(),
        routes: RouteLog::new(),
        auth: auth_client,
        contacts,
        menu: config.menu.clone(),
    };

    print_header(&shell.contacts, &shell.menu);
    print_help();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut sweep = tokio::time::interval(Duration::from_millis(500));

    prompt();
    loop {
        let search_deadline = shell.overlay.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !shell.handle_command(line.trim()).await {
                    break;
                }
                prompt();
            }
            _ = wait_until(search_deadline), if search_deadline.is_some() => {
                if let Some(request) = shell.overlay.poll(Instant::now()) {
                    match search_client.search(&request.query).await {
                        Ok(results) => shell.overlay.apply_results(request.seq, results),
                        Err(e) => shell.overlay.apply_error(request.seq, &e),
                    }
                    render_overlay(&shell.overlay);
                    prompt();
                }
            }
            _ = sweep.tick() => {
                shell.session.alerts.sweep(Instant::now());
            }
        }
    }

    tracing::info!("Klinika shell stopped");
    Ok(())
}

/// Sleep until `deadline`; pend forever when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(d) => tokio::time::sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending().await,
    }
}

impl Shell {
    /// Execute one REPL command. Returns `false` to exit the loop.
    async fn handle_command(&mut self, line: &str) -> bool {
        let now = Instant::now();
        let (command, rest) = split_command(line);

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => return false,
            "contacts" => {
                println!(
                    "{}  ·  {}  ·  {}",
                    self.contacts.phone, self.contacts.email, self.contacts.address
                );
            }
            "menu" => {
                self.session.toggle_menu();
                if self.session.menu_open() {
                    for item in &self.menu {
                        println!("  {} — {}", item.title, item.url);
                    }
                } else {
                    println!("(меню закрыто)");
                }
            }
            "search" => {
                if self.session.overlay() != ActiveOverlay::Search {
                    self.session.open_overlay(ActiveOverlay::Search);
                    self.overlay.open();
                }
                self.overlay.set_query(rest, now);
                render_overlay(&self.overlay);
            }
            "pick" => match parse_index(rest).and_then(|i| self.overlay.select(i)) {
                Some(selection) => {
                    self.session.close_overlay();
                    self.navigate(&selection.url);
                }
                None => println!("Нет такого результата."),
            },
            "chat" => {
                if !self.widget.is_open() {
                    self.session.open_overlay(ActiveOverlay::Chat);
                    self.widget.open();
                }
                let outcome = self.widget.send(rest).await;
                render_transcript(self.widget.transcript());
                if let SendOutcome::Replied { cards } = outcome {
                    if !cards.is_empty() {
                        self.panel.present(cards);
                        self.session.open_overlay(ActiveOverlay::Cards);
                        render_panel(&self.panel);
                    }
                }
            }
            "card" => match parse_index(rest).and_then(|i| self.panel.select(i)) {
                Some(nav) => {
                    self.session.close_overlay();
                    self.navigate(&nav.path);
                }
                None => println!("Нет такой карточки."),
            },
            "reset" => {
                self.widget.reset();
                println!("(диалог очищен)");
            }
            "phone" => println!("{}", format_phone_input(rest)),
            "register" => self.register(rest, now).await,
            "login" => self.sign_in(rest, now).await,
            "esc" => {
                self.overlay.dismiss();
                self.panel.dismiss();
                self.widget.close();
                self.session.close_overlay();
                self.session.close_modal();
                println!("(закрыто)");
            }
            other => println!("Неизвестная команда: {} (help — список команд)", other),
        }

        render_alerts(&self.session);
        true
    }

    /// `register <имя> <телефон> <пароль>`
    async fn register(&mut self, rest: &str, now: Instant) {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        let [name, phone, password] = parts.as_slice() else {
            println!("Использование: register <имя> <телефон> <пароль>");
            return;
        };

        self.session.open_modal(AuthModal::Register);
        let request = RegisterRequest {
            name: (*name).to_string(),
            phone: normalize_phone(phone).unwrap_or_else(|| (*phone).to_string()),
            email: None,
            password: (*password).to_string(),
        };

        match self.auth.register(&request).await {
            Ok(()) => {
                self.session.close_modal();
                self.session
                    .notify(AlertLevel::Success, "Регистрация прошла успешно", now);
            }
            Err(e) => {
                // The server's error string is shown verbatim.
                self.session.notify(AlertLevel::Error, e.to_string(), now);
            }
        }
    }

    /// `login <логин> <пароль>`
    async fn sign_in(&mut self, rest: &str, now: Instant) {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        let [login, password] = parts.as_slice() else {
            println!("Использование: login <логин> <пароль>");
            return;
        };

        self.session.open_modal(AuthModal::SignIn);
        let credentials = Credentials {
            login: (*login).to_string(),
            password: (*password).to_string(),
        };

        match self.auth.sign_in(&credentials).await {
            Ok(()) => {
                self.session.close_modal();
                self.session.notify(AlertLevel::Success, "Вы вошли", now);
                self.navigate(routes::ACCOUNT);
            }
            Err(e) => {
                self.session.notify(AlertLevel::Error, e.to_string(), now);
            }
        }
    }

    fn navigate(&mut self, path: &str) {
        self.routes.navigate(path);
        println!("→ {}", path);
    }
}

/// Split a REPL line into the command word and its argument tail.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn parse_index(rest: &str) -> Option<usize> {
    rest.parse::<usize>().ok()
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_header(contacts: &Contacts, menu: &[NavItem]) {
    println!("Клиника — {}", contacts.phone);
    let titles: Vec<&str> = menu.iter().map(|m| m.title.as_str()).collect();
    println!("{}", titles.join(" | "));
}

fn print_help() {
    println!("Команды:");
    println!("  search <текст>   — поиск по сайту (повтор команды = новые нажатия)");
    println!("  pick <n>         — открыть n-й результат поиска");
    println!("  chat <текст>     — вопрос ассистенту");
    println!("  card <n>         — открыть n-ю карточку рекомендации");
    println!("  menu | contacts  — навигация и контакты");
    println!("  register / login — регистрация и вход");
    println!("  phone <цифры>    — маска телефона");
    println!("  esc | reset | quit");
}

/// Render emphasized fragments in bold.
fn render_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| {
            if f.emphasis {
                format!("\x1b[1m{}\x1b[0m", f.text)
            } else {
                f.text.clone()
            }
        })
        .collect()
}

fn render_overlay(overlay: &SearchOverlay) {
    match overlay.view() {
        OverlayView::Shortcuts => {
            let labels: Vec<&str> = SearchOverlay::shortcut_kinds()
                .iter()
                .map(|k| k.label())
                .collect();
            println!("Разделы: {}", labels.join(" · "));
        }
        OverlayView::TooShort => println!("Введите минимум 3 символа."),
        OverlayView::Loading => println!("Ищем…"),
        OverlayView::NoMatches => println!("Ничего не найдено."),
        OverlayView::Results(groups) => {
            let mut index = 0;
            for group in groups {
                println!("{} ({})", group.label, group.items.len());
                for item in &group.items {
                    println!("  [{}] {}", index, render_fragments(&item.title));
                    if !item.description.is_empty() {
                        println!("      {}", render_fragments(&item.description));
                    }
                    index += 1;
                }
            }
        }
    }
}

fn render_transcript(transcript: &Transcript) {
    for message in transcript.messages() {
        let who = match message.role {
            Role::User => "Вы",
            Role::Assistant => "Ассистент",
        };
        println!("{}: {}", who, message.content);
        if !message.cards.is_empty() {
            println!("  (рекомендаций: {})", message.cards.len());
        }
    }
}

fn render_panel(panel: &CardPanel) {
    for (index, layout) in panel.layouts().iter().enumerate() {
        match layout {
            CardLayout::Specialist {
                name,
                qualification,
                specialization,
                experience,
            } => {
                println!("  [{}] {} — {}, {}", index, name, specialization, qualification);
                if let Some(experience) = experience {
                    println!("      стаж: {}", experience);
                }
            }
            CardLayout::Service {
                title,
                category,
                price,
            } => {
                println!("  [{}] {} ({})", index, title, category);
                if let Some(price) = price {
                    println!("      {}", price);
                }
            }
        }
    }
}

fn render_alerts(session: &UiSessionState) {
    for alert in session.alerts.iter() {
        let mark = match alert.level {
            AlertLevel::Info => "i",
            AlertLevel::Success => "+",
            AlertLevel::Error => "!",
        };
        println!("[{}] {}", mark, alert.text);
    }
}

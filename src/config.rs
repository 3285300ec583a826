use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub template: TemplateConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TemplateConfig {
    pub handlebars: HandlebarsTemplateConfig,
}

#[derive(Debug, Clone)]
pub struct HandlebarsTemplateConfig {
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    // in milliseconds
    pub debounce_ms: u64,
    // in milliseconds
    pub toast_auto_close_ms: u64,
    pub date_picker_years: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            toast_auto_close_ms: 5000,
            date_picker_years: crate::DEFAULT_YEAR_ITEMS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        dotenv::dotenv().ok();
        let form = FormConfig::default();

        Self {
            app: AppConfig {
                host: env::var("APP_HOST")
                    .unwrap_or("127.0.0.1".to_string())
                    .trim()
                    .to_string(),
                port: parse_var("APP_PORT", 8080),
            },
            template: TemplateConfig {
                handlebars: HandlebarsTemplateConfig {
                    folder: env::var("TEMPLATE_HANDLEBARS_FOLDER")
                        .unwrap_or("resources/handlebars".to_string())
                        .trim()
                        .to_string(),
                },
            },
            form: FormConfig {
                debounce_ms: parse_var("FORM_DEBOUNCE_MS", form.debounce_ms),
                toast_auto_close_ms: parse_var(
                    "FORM_TOAST_AUTO_CLOSE_MS",
                    form.toast_auto_close_ms,
                ),
                date_picker_years: date_picker_years(parse_var(
                    "FORM_DATE_PICKER_YEARS",
                    form.date_picker_years,
                )),
            },
        }
    }
}

/// The date of birth picker must reach back at least a century.
fn date_picker_years(value: u32) -> u32 {
    value.clamp(crate::DEFAULT_YEAR_ITEMS, crate::MAX_YEAR_ITEMS)
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse::<T>().unwrap_or_else(|_| {
            log::warn!("Config - {key} is not valid, using the default");
            default
        }),
        Err(_) => default,
    }
}

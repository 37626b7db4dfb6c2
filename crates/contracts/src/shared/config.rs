use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScreenConfig {
    pub screen: ScreenSection,
    pub columns: ColumnsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Подписи экрана
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScreenSection {
    pub title: String,
    pub search_placeholder: String,
    pub statistics_tab_label: String,
    pub list_tab_label: String,
    pub list_placeholder: String,
}

/// Заголовки колонок таблицы
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ColumnsSection {
    pub name: String,
    pub category: String,
    pub contact: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Конфигурация по умолчанию, встроенная в бинарник
const DEFAULT_CONFIG: &str = r#"
[screen]
title = "Title"
search_placeholder = "搜索"
statistics_tab_label = "订单统计"
list_tab_label = "订单列表"
list_placeholder = "订单列表内容"

[columns]
name = "名称"
category = "类型"
contact = "联系方式"

[logging]
level = "debug"
"#;

impl ScreenConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: ScreenConfig =
            toml::from_str(contents).context("Failed to parse screen configuration")?;
        Ok(config)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSection {
                title: "Title".to_string(),
                search_placeholder: "搜索".to_string(),
                statistics_tab_label: "订单统计".to_string(),
                list_tab_label: "订单列表".to_string(),
                list_placeholder: "订单列表内容".to_string(),
            },
            columns: ColumnsSection {
                name: "名称".to_string(),
                category: "类型".to_string(),
                contact: "联系方式".to_string(),
            },
            logging: LoggingSection::default(),
        }
    }
}

/// Загрузить конфигурацию экрана.
///
/// В браузере нет ни файлов, ни переменных окружения: единственный
/// источник — встроенный документ.
pub fn load_config() -> anyhow::Result<ScreenConfig> {
    ScreenConfig::from_toml(DEFAULT_CONFIG)
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// 缺省属性值（源记录未提供或为空白时统一使用）
pub const UNKNOWN_VALUE: &str = "Unknown";
/// 兜底规则的浏览器名称/浏览器类型
pub const DEFAULT_BROWSER: &str = "Default Browser";

static UNKNOWN_ARC: Lazy<Arc<str>> = Lazy::new(|| Arc::from(UNKNOWN_VALUE));

/// 兜底元数据：通配规则 `*` 挂载的唯一记录
pub static DEFAULT_CAPABILITIES: Lazy<Arc<Capabilities>> = Lazy::new(|| {
    let default_browser: Arc<str> = Arc::from(DEFAULT_BROWSER);
    let mut caps = Capabilities::unknown();
    caps.set(BrowsCapField::Browser, default_browser.clone());
    caps.set(BrowsCapField::BrowserType, default_browser);
    Arc::new(caps)
});

/// 元数据字段枚举（所有 schema 版本字段的并集）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowsCapField {
    Pattern,
    Browser,
    BrowserType,
    BrowserMajorVersion,
    Platform,
    PlatformVersion,
    DeviceType,
    DeviceName,
    DeviceCodeName,
    PlatformMaker,
    DeviceMaker,
    DeviceBrandName,
    Comment,
}

impl BrowsCapField {
    /// 全部字段，按记录输出顺序
    pub const ALL: [BrowsCapField; 13] = [
        BrowsCapField::Pattern,
        BrowsCapField::Browser,
        BrowsCapField::BrowserType,
        BrowsCapField::BrowserMajorVersion,
        BrowsCapField::Platform,
        BrowsCapField::PlatformVersion,
        BrowsCapField::DeviceType,
        BrowsCapField::DeviceName,
        BrowsCapField::DeviceCodeName,
        BrowsCapField::PlatformMaker,
        BrowsCapField::DeviceMaker,
        BrowsCapField::DeviceBrandName,
        BrowsCapField::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowsCapField::Pattern => "pattern",
            BrowsCapField::Browser => "browser",
            BrowsCapField::BrowserType => "browser_type",
            BrowsCapField::BrowserMajorVersion => "browser_major_version",
            BrowsCapField::Platform => "platform",
            BrowsCapField::PlatformVersion => "platform_version",
            BrowsCapField::DeviceType => "device_type",
            BrowsCapField::DeviceName => "device_name",
            BrowsCapField::DeviceCodeName => "device_code_name",
            BrowsCapField::PlatformMaker => "platform_maker",
            BrowsCapField::DeviceMaker => "device_maker",
            BrowsCapField::DeviceBrandName => "device_brand_name",
            BrowsCapField::Comment => "comment",
        }
    }
}

impl Display for BrowsCapField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 匹配结果元数据（浏览器/平台/设备属性）
/// 1. 所有字段恒有值，缺省为 "Unknown"
/// 2. 字段使用 Arc<str>，相同取值在整个目录内共享同一份内存
/// 3. 挂载到规则后以 Arc<Capabilities> 共享，不再修改
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// 模式的正则表示（调试用途，匹配不依赖该字段）
    pattern: Arc<str>,
    browser: Arc<str>,
    browser_type: Arc<str>,
    browser_major_version: Arc<str>,
    platform: Arc<str>,
    platform_version: Arc<str>,
    device_type: Arc<str>,
    device_name: Arc<str>,
    device_code_name: Arc<str>,
    platform_maker: Arc<str>,
    device_maker: Arc<str>,
    device_brand_name: Arc<str>,
    comment: Arc<str>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Capabilities {
    /// 全字段为 "Unknown" 的记录
    pub fn unknown() -> Self {
        let unknown = UNKNOWN_ARC.clone();
        Self {
            pattern: unknown.clone(),
            browser: unknown.clone(),
            browser_type: unknown.clone(),
            browser_major_version: unknown.clone(),
            platform: unknown.clone(),
            platform_version: unknown.clone(),
            device_type: unknown.clone(),
            device_name: unknown.clone(),
            device_code_name: unknown.clone(),
            platform_maker: unknown.clone(),
            device_maker: unknown.clone(),
            device_brand_name: unknown.clone(),
            comment: unknown,
        }
    }

    /// 兜底记录（浏览器为 "Default Browser"）
    pub fn default_record() -> Arc<Capabilities> {
        DEFAULT_CAPABILITIES.clone()
    }

    /// 写入单个字段（仅在挂载到规则前使用）
    pub fn set(&mut self, field: BrowsCapField, value: Arc<str>) {
        *self.slot_mut(field) = value;
    }

    /// 链式写入
    pub fn with(mut self, field: BrowsCapField, value: impl Into<Arc<str>>) -> Self {
        self.set(field, value.into());
        self
    }

    /// 按字段读取
    pub fn value(&self, field: BrowsCapField) -> &str {
        match field {
            BrowsCapField::Pattern => &self.pattern,
            BrowsCapField::Browser => &self.browser,
            BrowsCapField::BrowserType => &self.browser_type,
            BrowsCapField::BrowserMajorVersion => &self.browser_major_version,
            BrowsCapField::Platform => &self.platform,
            BrowsCapField::PlatformVersion => &self.platform_version,
            BrowsCapField::DeviceType => &self.device_type,
            BrowsCapField::DeviceName => &self.device_name,
            BrowsCapField::DeviceCodeName => &self.device_code_name,
            BrowsCapField::PlatformMaker => &self.platform_maker,
            BrowsCapField::DeviceMaker => &self.device_maker,
            BrowsCapField::DeviceBrandName => &self.device_brand_name,
            BrowsCapField::Comment => &self.comment,
        }
    }

    fn slot_mut(&mut self, field: BrowsCapField) -> &mut Arc<str> {
        match field {
            BrowsCapField::Pattern => &mut self.pattern,
            BrowsCapField::Browser => &mut self.browser,
            BrowsCapField::BrowserType => &mut self.browser_type,
            BrowsCapField::BrowserMajorVersion => &mut self.browser_major_version,
            BrowsCapField::Platform => &mut self.platform,
            BrowsCapField::PlatformVersion => &mut self.platform_version,
            BrowsCapField::DeviceType => &mut self.device_type,
            BrowsCapField::DeviceName => &mut self.device_name,
            BrowsCapField::DeviceCodeName => &mut self.device_code_name,
            BrowsCapField::PlatformMaker => &mut self.platform_maker,
            BrowsCapField::DeviceMaker => &mut self.device_maker,
            BrowsCapField::DeviceBrandName => &mut self.device_brand_name,
            BrowsCapField::Comment => &mut self.comment,
        }
    }

    /// 模式的正则表示（例如 `^mozilla\/5\.0.*?$`）
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 浏览器名称（例如 Chrome）
    pub fn browser(&self) -> &str {
        &self.browser
    }

    /// 浏览器类型（例如 Browser、Application）
    pub fn browser_type(&self) -> &str {
        &self.browser_type
    }

    /// 浏览器主版本号（例如 Chrome 的 55）
    pub fn browser_major_version(&self) -> &str {
        &self.browser_major_version
    }

    /// 平台名称（例如 Android、iOS、Win7、Win10）
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn platform_version(&self) -> &str {
        &self.platform_version
    }

    /// 设备类型（例如 Mobile Phone、Desktop、Tablet、Console、TV Device）
    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn device_code_name(&self) -> &str {
        &self.device_code_name
    }

    pub fn platform_maker(&self) -> &str {
        &self.platform_maker
    }

    pub fn device_maker(&self) -> &str {
        &self.device_maker
    }

    pub fn device_brand_name(&self) -> &str {
        &self.device_brand_name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl Display for Capabilities {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Capabilities{{browser='{}', browserType='{}', browserMajorVersion='{}', deviceType='{}', platform='{}', platformVersion='{}'}}",
            self.browser,
            self.browser_type,
            self.browser_major_version,
            self.device_type,
            self.platform,
            self.platform_version
        )
    }
}

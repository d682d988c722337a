use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::session::Session;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 계산기 자체의 입력 오류는 여기까지 오지 않고 각 핸들러에서 메시지로
/// 처리한다. 여기 오는 것은 세션을 계속할 수 없는 종류뿐이다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 세션 상태(기록/스냅샷)는 여기서 만들고 루프가 끝나면 함께 버린다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut session = Session::new();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Dosage => ui_cli::handle_dosage(tr, &mut session)?,
            MenuChoice::UnitConversion => {
                ui_cli::handle_unit_conversion(tr, config, &mut session)?
            }
            MenuChoice::Mixing => ui_cli::handle_mixing(tr, &mut session)?,
            MenuChoice::Dilution => ui_cli::handle_dilution(tr, &mut session)?,
            MenuChoice::History => ui_cli::handle_history(tr, &session)?,
            MenuChoice::Snapshot => ui_cli::handle_snapshot(tr, &mut session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

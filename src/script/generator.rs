use chrono::{DateTime, Local};

use super::method::InstallMethod;
use crate::catalog::AppRecord;
use crate::error::GenerateError;

const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Renders a Windows batch installer for a list of applications.
///
/// Record fields are interpolated verbatim. Nothing is escaped, so a `name`,
/// `silentArgs` or `directUrl` containing batch metacharacters ends up in the
/// script as-is.
pub struct ScriptGenerator<'a> {
    apps: &'a [AppRecord],
    method: InstallMethod,
    generated_at: DateTime<Local>,
}

impl<'a> ScriptGenerator<'a> {
    /// Apps are rendered in the order given; the generator never sorts.
    pub fn new(apps: &'a [AppRecord], method: InstallMethod) -> Result<Self, GenerateError> {
        if apps.is_empty() {
            return Err(GenerateError::EmptySelection);
        }
        Ok(Self {
            apps,
            method,
            generated_at: Local::now(),
        })
    }

    pub fn with_timestamp(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn generate(&self) -> String {
        tracing::debug!(apps = self.apps.len(), method = %self.method, "generating installer script");

        let mut script = self.header();
        script.push_str(&self.package_manager_checks());
        for (index, app) in self.apps.iter().enumerate() {
            script.push_str(&self.app_block(app, index));
        }
        script.push_str(&self.footer());
        script
    }

    fn header(&self) -> String {
        let total = self.apps.len();
        let generated_at = self.generated_at.format(TIMESTAMP_FORMAT);
        let method = self.method.as_str().to_uppercase();

        format!(
            r#"@echo off
:: ========================================
::   Ultimate App Installer Script
::   Generated on {generated_at}
::   Total Apps: {total}
::   Install Method: {method}
:: ========================================

echo.
echo ========================================
echo   Ultimate App Installer
echo ========================================
echo.
echo Installing {total} application(s)...
echo This may take a while. Please be patient.
echo.

:: Check for admin rights
net session >nul 2>&1
if %errorlevel% neq 0 (
    echo ERROR: This script requires Administrator privileges!
    echo Please right-click and select "Run as administrator"
    pause
    exit /b 1
)

:: Create temp directory for downloads
set "DOWNLOAD_DIR=%TEMP%\AppInstaller"
if not exist "%DOWNLOAD_DIR%" mkdir "%DOWNLOAD_DIR%"

"#
        )
    }

    fn package_manager_checks(&self) -> String {
        let mut script = String::new();

        if self.method.uses_winget() {
            script.push_str(
                r#":: Check for winget
echo Checking for winget...
winget --version >nul 2>&1
if %errorlevel% equ 0 (
    set "WINGET_AVAILABLE=1"
    echo [OK] Winget is available
) else (
    set "WINGET_AVAILABLE=0"
    echo [WARNING] Winget is not available
)
echo.

"#,
            );
        }

        if self.method.uses_choco() {
            script.push_str(
                r#":: Check for Chocolatey
echo Checking for Chocolatey...
choco --version >nul 2>&1
if %errorlevel% equ 0 (
    set "CHOCO_AVAILABLE=1"
    echo [OK] Chocolatey is available
) else (
    set "CHOCO_AVAILABLE=0"
    echo [WARNING] Chocolatey is not available
    echo Installing Chocolatey...
    powershell -NoProfile -ExecutionPolicy Bypass -Command "iex ((New-Object System.Net.WebClient).DownloadString('https://chocolatey.org/install.ps1'))"
    if %errorlevel% equ 0 (
        set "CHOCO_AVAILABLE=1"
        echo [OK] Chocolatey installed successfully
        refreshenv
    )
)
echo.

"#,
            );
        }

        script
    }

    fn app_block(&self, app: &AppRecord, index: usize) -> String {
        let label = end_label(&app.id);
        let mut script = format!(
            r#"
:: ========================================
:: [{position}/{total}] {name}
:: ========================================
echo.
echo Installing {name}...
"#,
            position = index + 1,
            total = self.apps.len(),
            name = app.name,
        );

        match self.method {
            InstallMethod::Auto => script.push_str(&fallback_chain(app, &label)),
            forced => match forced_path(app, forced) {
                Some(path) => script.push_str(&path),
                None => tracing::warn!(
                    app = %app.id,
                    method = %forced,
                    "app has no install path for the forced method, no attempt emitted"
                ),
            },
        }

        script.push_str(&format!("\n:{label}\n"));
        script
    }

    fn footer(&self) -> String {
        format!(
            r#"
:: ========================================
::   Installation Complete
:: ========================================
echo.
echo ========================================
echo   All installations completed!
echo ========================================
echo.
echo Installed {total} application(s)
echo.
echo Please restart your computer if required by any application.
echo.

:: Cleanup
rmdir /s /q "%DOWNLOAD_DIR%" 2>nul

echo Press any key to exit...
pause >nul
"#,
            total = self.apps.len()
        )
    }
}

/// Convergence label for an app: `END_` plus the id upper-cased with `-` turned into `_`.
pub fn end_label(id: &str) -> String {
    format!("END_{}", id.to_uppercase().replace('-', "_"))
}

/// `msi` when the URL mentions `.msi` anywhere, `exe` otherwise.
pub fn payload_extension(url: &str) -> &'static str {
    if url.contains(".msi") {
        "msi"
    } else {
        "exe"
    }
}

/// winget, then Chocolatey, then direct download. Each step only runs when the
/// previous one did not jump to the convergence label.
fn fallback_chain(app: &AppRecord, label: &str) -> String {
    let mut script = String::new();

    if let Some(package) = app.winget_package() {
        script.push_str(&format!(
            r#"
if %WINGET_AVAILABLE%==1 (
    echo [Method: Winget]
    winget install --id {package} --silent --accept-package-agreements --accept-source-agreements
    if %errorlevel% equ 0 (
        echo [OK] {name} installed successfully via winget
        goto :{label}
    ) else (
        echo [WARNING] Winget installation failed, trying alternative...
    )
)
"#,
            name = app.name,
        ));
    }

    if let Some(package) = app.choco_package() {
        script.push_str(&format!(
            r#"
if %CHOCO_AVAILABLE%==1 (
    echo [Method: Chocolatey]
    choco install {package} -y --ignore-checksums
    if %errorlevel% equ 0 (
        echo [OK] {name} installed successfully via Chocolatey
        goto :{label}
    ) else (
        echo [WARNING] Chocolatey installation failed, trying direct download...
    )
)
"#,
            name = app.name,
        ));
    }

    if let Some(url) = app.download_url() {
        script.push_str(&direct_download(app, url));
    }

    script
}

/// The single path for a forced method, or `None` when the record lacks the field it needs.
fn forced_path(app: &AppRecord, method: InstallMethod) -> Option<String> {
    match method {
        InstallMethod::Winget => app.winget_package().map(|package| {
            forced_package_install(
                app,
                "Winget",
                &format!(
                    "winget install --id {package} --silent --accept-package-agreements --accept-source-agreements"
                ),
            )
        }),
        InstallMethod::Choco => app.choco_package().map(|package| {
            forced_package_install(
                app,
                "Chocolatey",
                &format!("choco install {package} -y --ignore-checksums"),
            )
        }),
        InstallMethod::Direct => app.download_url().map(|url| direct_download(app, url)),
        InstallMethod::Auto => None,
    }
}

fn forced_package_install(app: &AppRecord, manager: &str, command: &str) -> String {
    format!(
        r#"
echo [Method: {manager}]
{command}
if %errorlevel% equ 0 (
    echo [OK] {name} installed successfully
) else (
    echo [ERROR] Failed to install {name}
)
"#,
        name = app.name,
    )
}

fn direct_download(app: &AppRecord, url: &str) -> String {
    let extension = payload_extension(url);
    let payload = format!(r"%DOWNLOAD_DIR%\{}_installer.{extension}", app.id);
    let install = if extension == "msi" {
        format!(r#"msiexec /i "{payload}" {}"#, app.silent_args)
    } else {
        format!(r#""{payload}" {}"#, app.silent_args)
    };

    format!(
        r#"
echo [Method: Direct Download]
echo Downloading from: {url}
powershell -Command "& {{[Net.ServicePointManager]::SecurityProtocol = [Net.SecurityProtocolType]::Tls12; try {{ Invoke-WebRequest -Uri '{url}' -OutFile '{payload}' -UseBasicParsing -ErrorAction Stop }} catch {{ Write-Host 'Download failed' }}}}"
if exist "{payload}" (
    echo Installing {name}...
    {install}
    timeout /t 5 /nobreak >nul
    del "{payload}"
    echo [OK] {name} installation completed
) else (
    echo [ERROR] Failed to download {name}
)
"#,
        name = app.name,
    )
}

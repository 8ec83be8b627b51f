// ==========================================
// 菜单目录同步引擎 - CLI 主入口
// ==========================================
// 用法:
//   catalog-sync export <tenant_id> [output_dir]
//   catalog-sync import <tenant_id> <file>
//   catalog-sync batches [limit]
//
// 环境变量:
//   CATALOG_SYNC_DB  数据库路径（默认: 用户数据目录/catalog-sync/catalog_sync.db）
//   RUST_LOG         日志级别
// ==========================================

use catalog_sync::api::{ExportApi, ImportApi};
use catalog_sync::db::{init_schema, open_sqlite_connection};
use catalog_sync::logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// 解析数据库路径
///
/// 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI），
/// 否则落在用户数据目录下。
fn resolve_db_path() -> String {
    if let Ok(path) = std::env::var("CATALOG_SYNC_DB") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./catalog_sync.db");
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("catalog-sync");
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("catalog_sync.db");
        }
    }
    path.display().to_string()
}

fn print_usage() {
    eprintln!("用法:");
    eprintln!("  catalog-sync export <tenant_id> [output_dir]");
    eprintln!("  catalog-sync import <tenant_id> <file>");
    eprintln!("  catalog-sync batches [limit]");
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", catalog_sync::APP_NAME);
    tracing::info!("版本: {}", catalog_sync::VERSION);
    tracing::info!("==================================================");

    let db_path = resolve_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 首次运行时建表
    {
        let conn = match open_sqlite_connection(&db_path) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("数据库打开失败: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = init_schema(&conn) {
            eprintln!("数据库初始化失败: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("export") => run_export(&db_path, &args[1..]).await,
        Some("import") => run_import(&db_path, &args[1..]).await,
        Some("batches") => run_batches(&db_path, &args[1..]).await,
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("执行失败: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_export(db_path: &str, args: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(tenant_id) = args.first() else {
        print_usage();
        return Ok(false);
    };
    let dir = args.get(1).map(String::as_str).unwrap_or(".");

    let api = ExportApi::new(db_path.to_string());
    let response = api.export_catalog(tenant_id, dir).await?;

    println!("{}", response.message);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.success)
}

async fn run_import(db_path: &str, args: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let (Some(tenant_id), Some(file)) = (args.first(), args.get(1)) else {
        print_usage();
        return Ok(false);
    };

    let api = ImportApi::new(db_path.to_string());
    let response = api.import_catalog(tenant_id, file).await?;

    println!("{}", response.message);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response.success)
}

async fn run_batches(db_path: &str, args: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let limit = args
        .first()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(10);

    let api = ImportApi::new(db_path.to_string());
    let response = api.recent_batches(limit).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(true)
}

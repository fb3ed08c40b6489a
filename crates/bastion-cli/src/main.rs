use bastion_auth::{TokenOptions, TokenVerifier, issue_token};
use bastion_cli::parse_claims;
use bastion_config::JwtConfig;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "bastion-cli")]
#[command(about = "Bastion CLI - mint and inspect bearer tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a token the way the mobile app does and print it
    MintToken {
        /// Subject (`sub` claim)
        #[arg(short = 's', long)]
        sub: Option<String>,

        /// Lifetime in seconds (defaults to JWT_TOKEN_TTL_SECONDS, 2 hours)
        #[arg(short = 't', long, allow_hyphen_values = true)]
        ttl: Option<i64>,

        /// Issuer (defaults to the first entry of JWT_ISSUERS)
        #[arg(long)]
        iss: Option<String>,

        /// Audience (defaults to JWT_AUDIENCE)
        #[arg(long)]
        aud: Option<String>,

        /// Extra claim as key=value; repeatable
        #[arg(short = 'c', long = "claim")]
        claims: Vec<String>,
    },
    /// Verify a token with the server's settings and print its claims
    VerifyToken {
        /// The compact JWT
        token: String,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let jwt_config = match JwtConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::MintToken {
            sub,
            ttl,
            iss,
            aud,
            claims,
        } => handle_mint_token(&jwt_config, sub, ttl, iss, aud, claims),
        Commands::VerifyToken { token } => handle_verify_token(&jwt_config, &token),
    }
}

fn handle_mint_token(
    jwt_config: &JwtConfig,
    subject: Option<String>,
    ttl_seconds: Option<i64>,
    issuer: Option<String>,
    audience: Option<String>,
    claims: Vec<String>,
) {
    let extra = match parse_claims(&claims) {
        Ok(extra) => extra,
        Err(e) => {
            eprintln!("❌ Invalid claim: {}", e);
            std::process::exit(1);
        }
    };

    let options = TokenOptions {
        subject,
        ttl_seconds,
        issuer,
        audience,
        extra,
    };

    match issue_token(jwt_config, &options) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("❌ Error signing token: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_verify_token(jwt_config: &JwtConfig, token: &str) {
    let verifier = TokenVerifier::new(jwt_config);

    match verifier.verify(token.trim()) {
        Ok(claims) => match serde_json::to_string_pretty(&claims) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Error printing claims: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("❌ Token rejected ({}): {}", e.reason(), e);
            if let Ok(payload) = verifier.peek(token.trim()) {
                eprintln!("   Unverified payload: {}", payload);
            }
            std::process::exit(1);
        }
    }
}

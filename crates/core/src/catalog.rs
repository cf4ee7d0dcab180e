//! Built-in curriculum content: the three-month roadmap and the link hub.

use crate::error::Error;
use crate::model::{
    Difficulty, Lab, Milestone, PhaseDraft, PhaseId, Project, ResourceGroup, ResourceLink, Roadmap,
    Topic,
};

/// Build the shipped roadmap.
///
/// # Errors
///
/// Returns `Error::Phase` or `Error::Roadmap` if the authored content breaks a
/// content invariant.
pub fn builtin_roadmap() -> Result<Roadmap, Error> {
    let phases = vec![
        foundation().validate()?,
        defense().validate()?,
        offense().validate()?,
    ];
    Ok(Roadmap::new(phases, intel_hub())?)
}

fn foundation() -> PhaseDraft {
    PhaseDraft {
        id: PhaseId::new(1),
        month: 1,
        title: "The Foundation".into(),
        focus: "Networking & OS Security".into(),
        icon: "🌐".into(),
        description: "Before defending a system, you must understand how it talks and how it breathes. This month focuses on the core plumbing of IT.".into(),
        topics: vec![
            Topic::new("OSI Model", ["Cloudflare: What is the OSI Model?", "Professor Messer's Network+ Videos"])
                .with_tooltip("Open Systems Interconnection model: A conceptual framework used to understand network interactions in seven layers."),
            Topic::new("TCP/IP Suite", ["RFC 793 (TCP Spec)", "Wireshark University: TCP Deep Dive"])
                .with_tooltip("The conceptual model and set of communications protocols used in the Internet and similar computer networks."),
            Topic::new("Linux Command Line", ["OverTheWire: Bandit Wargame", "Linux Journey (Free Course)"])
                .with_tooltip("The primary interface for managing servers, automating tasks, and performing security audits."),
            Topic::new("Windows Internals", ["Microsoft Learn: Windows Architecture", "Sysinternals Documentation"])
                .with_tooltip("Understanding processes, threads, memory management, and security descriptors within Windows."),
            Topic::new("Basic Scripting", ["Automate the Boring Stuff with Python", "Bash Academy"])
                .with_tooltip("Automation is key. Python and Bash allow for rapid tool development and log parsing."),
        ],
        milestones: vec![
            Milestone::new("m1-1", "Complete Cisco Networking Basics", "Master IP addressing, subnetting, and protocols.")
                .with_guide([
                    "IP Addressing: Understand IPv4 (32-bit) vs IPv6 (128-bit). Learn the difference between Public and Private (RFC 1918) addresses.",
                    "Subnetting: Master the 'Magic Number' method. Convert CIDR (e.g., /24) to Subnet Masks (255.255.255.0).",
                    "Protocols: Study HTTP (80), HTTPS (443), SSH (22), DNS (53), and DHCP (67/68). Learn how the 3-Way Handshake (SYN -> SYN/ACK -> ACK) works.",
                ]),
            Milestone::new("m1-2", "Linux Power User & Hardening", "Learn CLI and implement 'Hard Mode' security procedures.")
                .with_guide([
                    "Root Restriction: Disable direct root login in /etc/ssh/sshd_config. Use 'sudo' for everything.",
                    "Password Policy: Implement libpam-cracklib and set minimum length (14+) and complexity in /etc/pam.d/common-password.",
                    "Filesystem Hardening: Mount /tmp and /var/tmp with 'noexec', 'nosuid', and 'nodev' options in /etc/fstab.",
                    "Kernel Hardening: Configure /etc/sysctl.conf to ignore ICMP redirects and enable ASLR (Address Space Layout Randomization).",
                ]),
            Milestone::new("m1-3", "Virtualization Setup (Proxmox)", "Deploy a high-performance home lab using Proxmox VE.")
                .with_guide([
                    "Hardware Check: Ensure VT-x or AMD-V is enabled in your BIOS.",
                    "Installation: Burn Proxmox ISO to USB using Rufus or BalenaEtcher. Boot and follow the Debian-based installer.",
                    "Network Config: Create a Linux Bridge (vmbr0) for management and a separate bridge (vmbr1) for your 'Dark Net' lab subnet.",
                    "Storage: Setup ZFS for data integrity or LVM-Thin for snapshots. Snapshot your VMs before running any malware!",
                ]),
        ],
        labs: vec![
            Lab::new("Packet Hunting", ["Wireshark", "tcpdump"], "Analyze a PCAP file to identify an unencrypted login session.", Difficulty::Easy)
                .with_tooltip("Hands-on traffic analysis to find plaintext credentials in transit."),
            Lab::new("Hardening Linux", ["SSH", "UFW", "Systemd"], "Secure a fresh Ubuntu install by disabling services and configuring firewall rules.", Difficulty::Medium)
                .with_tooltip("System administration task focusing on reducing the attack surface of a server."),
        ],
        project: Project::new(
            "The Ultimate Home Lab",
            "Build a multi-OS environment consisting of a pfSense firewall, a Kali Linux attacker machine, and a Windows Server target.",
            ["Network Diagram", "Firewall Rule List", "Lab Connectivity Test Report"],
        ),
    }
}

fn defense() -> PhaseDraft {
    PhaseDraft {
        id: PhaseId::new(2),
        month: 2,
        title: "Defense & Operations".into(),
        focus: "SOC, SIEM & Incident Response".into(),
        icon: "🛡️".into(),
        description: "Shifting from setup to monitoring. Learn to spot the 'smoke' before the 'fire' through logging and analysis.".into(),
        topics: vec![
            Topic::new("SIEM", ["Elastic Security Guide", "Wazuh Documentation"])
                .with_tooltip("Security Information and Event Management: Tools providing real-time analysis of security alerts."),
            Topic::new("Log Analysis", ["SANS Institute: Log Management Gold Standard", "Splunk Fundamentals"])
                .with_tooltip("Reviewing computer-generated event logs to identify patterns and potential security threats."),
            Topic::new("EDR", ["CrowdStrike: What is EDR?", "Open Source EDR: Velociraptor"])
                .with_tooltip("Endpoint Detection and Response: Technology that monitors end-user devices for cyber threats."),
        ],
        milestones: vec![
            Milestone::new("m2-1", "Deploy a SIEM", "Install Wazuh or the ELK stack in your home lab."),
            Milestone::new("m2-2", "Log Ingestion", "Feed Windows Event Logs and Syslog into your SIEM."),
            Milestone::new("m2-3", "Crypto Challenge", "Solve 5 basic CTF-style cryptography problems."),
        ],
        labs: vec![
            Lab::new("The Brute Force Detector", ["Wazuh", "Hydra"], "Perform a brute force attack on your own server and create a SIEM alert to block the IP.", Difficulty::Medium)
                .with_tooltip("Automated threat detection and response using modern SIEM correlation rules."),
            Lab::new("Memory Forensics", ["Volatility"], "Extract password hashes from a memory dump of a compromised machine.", Difficulty::Hard)
                .with_tooltip("Advanced forensic analysis of volatile memory (RAM) to recover artifacts."),
        ],
        project: Project::new(
            "Active Monitoring Dashboard",
            "Create a real-time SOC dashboard using Grafana that visualizes failed SSH logins and unauthorized file changes.",
            ["JSON Dashboard Export", "Detection Logic Explanation", "Incident Report Sample"],
        ),
    }
}

fn offense() -> PhaseDraft {
    PhaseDraft {
        id: PhaseId::new(3),
        month: 3,
        title: "Offense & Specialization".into(),
        focus: "Penetration Testing & Web Sec".into(),
        icon: "⚔️".into(),
        description: "Thinking like an attacker to build better defenses. Exploring vulnerabilities and cloud environments.".into(),
        topics: vec![
            Topic::new("Vulnerability Assessment", ["Nessus Free Guide", "Qualys Community Edition"])
                .with_tooltip("The process of identifying, quantifying, and prioritizing vulnerabilities in a system."),
            Topic::new("OWASP Top 10", ["OWASP Official Documentation", "PortSwigger Web Security Academy"])
                .with_tooltip("Standard awareness document for developers and web application security representing the most critical risks."),
            Topic::new("Cloud Security", ["AWS Security Fundamentals", "Microsoft SC-900 Exam Topics"])
                .with_tooltip("Securing data, applications, and infrastructure in environments like AWS, Azure, and GCP."),
        ],
        milestones: vec![
            Milestone::new("m3-1", "Web App Hacking Basics", "Understand SQLi, XSS, and IDOR."),
            Milestone::new("m3-2", "Cloud IAM Hardening", "Learn the principle of least privilege in AWS/Azure."),
            Milestone::new("m3-3", "Policy Writing", "Draft a basic Acceptable Use Policy (AUP)."),
        ],
        labs: vec![
            Lab::new("Juice Shop Exploitation", ["Burp Suite", "OWASP Juice Shop"], "Perform a successful SQL injection to login as 'admin' without a password.", Difficulty::Medium)
                .with_tooltip("Practical web application penetration testing using the industry-standard proxy tool."),
            Lab::new("Metasploit Mastery", ["Metasploit", "Nmap"], "Identify a service vulnerability and execute a reverse shell payload.", Difficulty::Hard)
                .with_tooltip("Learning the exploitation lifecycle from reconnaissance to post-exploitation."),
        ],
        project: Project::new(
            "Full Scope Pen Test",
            "Conduct a black-box penetration test on a vulnerable VM (like Metasploitable) and document every finding.",
            ["Professional Pen-Test Report", "Remediation Guide", "Risk Matrix"],
        ),
    }
}

fn intel_hub() -> Vec<ResourceGroup> {
    vec![
        ResourceGroup::new(
            "News Outlets",
            "📰",
            vec![
                ResourceLink::new("The Hacker News", "https://thehackernews.com/"),
                ResourceLink::new("BleepingComputer", "https://www.bleepingcomputer.com/"),
                ResourceLink::new("Threatpost", "https://threatpost.com/"),
            ],
        ),
        ResourceGroup::new(
            "Expert Blogs",
            "✍️",
            vec![
                ResourceLink::new("Krebs on Security", "https://krebsonsecurity.com/"),
                ResourceLink::new("Dark Reading", "https://www.darkreading.com/"),
                ResourceLink::new("Schneier on Security", "https://www.schneier.com/"),
            ],
        ),
        ResourceGroup::new(
            "Communities",
            "🤝",
            vec![
                ResourceLink::new("r/cybersecurity", "https://www.reddit.com/r/cybersecurity/"),
                ResourceLink::new("Hack The Box Forums", "https://forum.hackthebox.com/"),
                ResourceLink::new("Wilders Security", "https://www.wilderssecurity.com/"),
            ],
        ),
    ]
}

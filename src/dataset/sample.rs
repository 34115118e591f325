//! The order table shipped with the dashboard

use super::order::Order;

/// (order id, user, project, address, display date, status)
const SAMPLE_ORDERS: [(&str, &str, &str, &str, &str, &str); 41] = [
    ("#CM9801", "Natali Craig", "Landing Page", "Meadow Lane Oakland", "Just now", "In Progress"),
    ("#CM9802", "Kate Morrison", "CRM Admin pages", "Larry San Francisco", "A minute ago", "Complete"),
    ("#CM9803", "Drew Cano", "Client Project", "Bagwell Avenue Ocala", "1 hour ago", "Pending"),
    ("#CM9804", "Orlando Diggs", "Admin Dashboard", "Washburn Baton Rouge", "Yesterday", "Approved"),
    ("#CM9805", "Andi Lane", "App Landing Page", "Nest Lane Olivette", "Feb 2, 2023", "Rejected"),
    ("#CM9806", "John Doe", "Justpay Project", "Bengaluru", "Just now", "In Progress"),
    ("#CM9807", "Sarah Wilson", "E-commerce Platform", "New York City", "2 hours ago", "Complete"),
    ("#CM9808", "Mike Johnson", "Mobile App", "Los Angeles", "3 hours ago", "Pending"),
    ("#CM9809", "Emily Davis", "Website Redesign", "Chicago", "4 hours ago", "Approved"),
    ("#CM9810", "David Brown", "API Integration", "Houston", "5 hours ago", "In Progress"),
    ("#CM9811", "Lisa Anderson", "Database Migration", "Phoenix", "6 hours ago", "Complete"),
    ("#CM9812", "Robert Taylor", "Cloud Infrastructure", "Philadelphia", "7 hours ago", "Pending"),
    ("#CM9813", "Jennifer Martinez", "Security Audit", "San Antonio", "8 hours ago", "Approved"),
    ("#CM9814", "William Garcia", "Performance Optimization", "San Diego", "9 hours ago", "In Progress"),
    ("#CM9815", "Amanda Rodriguez", "User Analytics", "Dallas", "10 hours ago", "Complete"),
    ("#CM9816", "Christopher Lee", "Payment Gateway", "San Jose", "11 hours ago", "Pending"),
    ("#CM9817", "Michelle White", "Content Management", "Austin", "12 hours ago", "Approved"),
    ("#CM9818", "Daniel Harris", "Email Marketing", "Jacksonville", "13 hours ago", "In Progress"),
    ("#CM9819", "Ashley Clark", "Social Media Integration", "Fort Worth", "14 hours ago", "Complete"),
    ("#CM9820", "Matthew Lewis", "Data Visualization", "Columbus", "15 hours ago", "Pending"),
    ("#CM9821", "Jessica Walker", "Automated Testing", "Charlotte", "16 hours ago", "Approved"),
    ("#CM9822", "Andrew Hall", "Microservices", "Seattle", "17 hours ago", "In Progress"),
    ("#CM9823", "Stephanie Allen", "DevOps Pipeline", "Denver", "18 hours ago", "Complete"),
    ("#CM9824", "Kevin Young", "Machine Learning", "Washington", "19 hours ago", "Pending"),
    ("#CM9825", "Nicole King", "Blockchain Integration", "Boston", "20 hours ago", "Approved"),
    ("#CM9826", "Ryan Wright", "IoT Dashboard", "El Paso", "21 hours ago", "In Progress"),
    ("#CM9827", "Samantha Lopez", "Real-time Chat", "Nashville", "22 hours ago", "Complete"),
    ("#CM9828", "Brandon Hill", "Video Streaming", "Detroit", "23 hours ago", "Pending"),
    ("#CM9829", "Rachel Scott", "AR/VR Application", "Oklahoma City", "1 day ago", "Approved"),
    ("#CM9830", "Tyler Green", "AI Chatbot", "Portland", "1 day ago", "In Progress"),
    ("#CM9831", "Lauren Adams", "GraphQL API", "Las Vegas", "1 day ago", "Complete"),
    ("#CM9832", "Justin Baker", "WebSocket Server", "Louisville", "1 day ago", "Pending"),
    ("#CM9833", "Megan Nelson", "File Upload System", "Baltimore", "1 day ago", "Approved"),
    ("#CM9834", "Jacob Carter", "Search Engine", "Milwaukee", "1 day ago", "In Progress"),
    ("#CM9835", "Kayla Mitchell", "Notification System", "Albuquerque", "1 day ago", "Complete"),
    ("#CM9836", "Nathan Perez", "Caching Layer", "Tucson", "1 day ago", "Pending"),
    ("#CM9837", "Brittany Roberts", "Logging System", "Fresno", "1 day ago", "Approved"),
    ("#CM9838", "Zachary Turner", "Monitoring Dashboard", "Sacramento", "1 day ago", "In Progress"),
    ("#CM9839", "Hannah Phillips", "Backup System", "Mesa", "1 day ago", "Complete"),
    ("#CM9840", "Caleb Campbell", "Load Balancer", "Kansas City", "1 day ago", "Pending"),
    ("#CM9841", "Olivia Parker", "CDN Integration", "Atlanta", "1 day ago", "Approved"),
];

/// Builds the shipped orders in insertion order
pub(crate) fn sample_orders() -> Vec<Order> {
    SAMPLE_ORDERS
        .iter()
        .map(|&(id, user, project, address, date, status)| {
            Order::new(id, user, project, address, date, status)
        })
        .collect()
}
